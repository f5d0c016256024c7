use super::db::Db;
use crate::libs::error::TodoError;
use crate::libs::formatter::DATE_FORMAT;
use crate::libs::todo::{ClearScope, Priority, StatusFilter, Todo, TodoFilter, TodoUpdate};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};
use rusqlite::{params, params_from_iter, OptionalExtension, Row};
use tracing::debug;

const INSERT_TODO: &str = "INSERT INTO todos (title, priority, category, due_date) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TODOS: &str = "SELECT id, title, done, priority, category, created_at, due_date FROM todos";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_BY_ID: &str = "ORDER BY id ASC";
const EXISTS_TODO: &str = "SELECT EXISTS(SELECT 1 FROM todos WHERE id = ?1)";
const UPDATE_STATUS: &str = "UPDATE todos SET done = ?2 WHERE id = ?1";
const DELETE_TODO: &str = "DELETE FROM todos WHERE id = ?1";
const COUNT_ALL: &str = "SELECT COUNT(*) FROM todos";
const COUNT_COMPLETED: &str = "SELECT COUNT(*) FROM todos WHERE done = 1";
const DELETE_ALL: &str = "DELETE FROM todos";
const DELETE_COMPLETED: &str = "DELETE FROM todos WHERE done = 1";

type Result<T> = std::result::Result<T, TodoError>;

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: TodoError| FromSqlError::Other(Box::new(e)))
    }
}

/// Repository over the `todos` table.
pub struct Todos {
    db: Db,
}

impl Todos {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Inserts a pending todo and returns its id.
    ///
    /// A missing due date is stored as `NULL`.
    pub fn insert(&mut self, title: &str, priority: Priority, category: &str, due_date: Option<NaiveDate>) -> Result<i64> {
        let due_date = due_date.map(|d| d.format(DATE_FORMAT).to_string());
        self.db.conn.execute(INSERT_TODO, params![title, priority, category, due_date])?;

        Ok(self.db.conn.last_insert_rowid())
    }

    pub fn get_by_id(&self, id: i64) -> Result<Todo> {
        self.db
            .conn
            .query_row(&format!("{} {}", SELECT_TODOS, WHERE_ID), params![id], todo_from_row)
            .optional()?
            .ok_or(TodoError::NotFound(id))
    }

    pub fn exists(&self, id: i64) -> Result<bool> {
        Ok(self.db.conn.query_row(EXISTS_TODO, params![id], |row| row.get(0))?)
    }

    /// Lists todos matching `filter`, oldest first.
    ///
    /// Conditions are only ever added: the status restriction first, then
    /// equality on priority and category when given. Every value is bound
    /// as a parameter.
    pub fn fetch(&self, filter: &TodoFilter) -> Result<Vec<Todo>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        match filter.status() {
            StatusFilter::Completed => conditions.push("done = 1"),
            StatusFilter::Pending => conditions.push("done = 0"),
            StatusFilter::Any => {}
        }

        if let Some(priority) = filter.priority {
            conditions.push("priority = ?");
            values.push(Value::Text(priority.as_str().to_string()));
        }

        if let Some(category) = filter.category.as_deref().filter(|c| !c.is_empty()) {
            conditions.push("category = ?");
            values.push(Value::Text(category.to_string()));
        }

        let mut query = SELECT_TODOS.to_string();
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push(' ');
        query.push_str(ORDER_BY_ID);
        debug!(%query, params = values.len(), "fetching todos");

        let mut stmt = self.db.conn.prepare(&query)?;
        let todo_iter = stmt.query_map(params_from_iter(values.iter()), todo_from_row)?;

        let mut todos = Vec::new();
        for todo in todo_iter {
            todos.push(todo?);
        }

        Ok(todos)
    }

    pub fn set_status(&mut self, id: i64, done: bool) -> Result<()> {
        let affected = self.db.conn.execute(UPDATE_STATUS, params![id, done])?;
        if affected == 0 {
            return Err(TodoError::NotFound(id));
        }
        Ok(())
    }

    /// Applies the fields present in `update`; absent fields are left as they are.
    ///
    /// Returns the number of rows changed. An empty update does not touch the
    /// store and returns `0`.
    pub fn update(&mut self, id: i64, update: &TodoUpdate) -> Result<usize> {
        let mut assignments: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(title) = &update.title {
            assignments.push("title = ?");
            values.push(Value::Text(title.clone()));
        }

        if let Some(priority) = update.priority {
            assignments.push("priority = ?");
            values.push(Value::Text(priority.as_str().to_string()));
        }

        if let Some(category) = &update.category {
            assignments.push("category = ?");
            values.push(Value::Text(category.clone()));
        }

        match update.due_date {
            Some(Some(due)) => {
                assignments.push("due_date = ?");
                values.push(Value::Text(due.format(DATE_FORMAT).to_string()));
            }
            Some(None) => assignments.push("due_date = NULL"),
            None => {}
        }

        if assignments.is_empty() {
            return Ok(0);
        }

        let query = format!("UPDATE todos SET {} WHERE id = ?", assignments.join(", "));
        values.push(Value::Integer(id));
        debug!(%query, params = values.len(), "updating todo");

        Ok(self.db.conn.execute(&query, params_from_iter(values.iter()))?)
    }

    /// Deletes by id. Deleting a missing id affects no rows and is not an error.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        Ok(self.db.conn.execute(DELETE_TODO, params![id])?)
    }

    pub fn count(&self, scope: ClearScope) -> Result<usize> {
        let query = match scope {
            ClearScope::All => COUNT_ALL,
            ClearScope::Completed => COUNT_COMPLETED,
        };
        let count: i64 = self.db.conn.query_row(query, [], |row| row.get(0))?;

        Ok(count as usize)
    }

    /// Removes every todo in `scope` and returns how many were removed.
    pub fn clear(&mut self, scope: ClearScope) -> Result<usize> {
        let query = match scope {
            ClearScope::All => DELETE_ALL,
            ClearScope::Completed => DELETE_COMPLETED,
        };

        Ok(self.db.conn.execute(query, [])?)
    }
}

fn todo_from_row(row: &Row<'_>) -> rusqlite::Result<Todo> {
    let created_at: NaiveDateTime = row.get(5)?;

    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        done: row.get(2)?,
        priority: row.get(3)?,
        category: row.get(4)?,
        created_at: created_at.and_utc(),
        due_date: row.get(6)?,
    })
}
