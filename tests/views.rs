#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, NaiveDate, Utc};
    use todo_cli::libs::color::{colorize, Color};
    use todo_cli::libs::table::strip_ansi;
    use todo_cli::libs::todo::{Priority, Todo};
    use todo_cli::libs::view::View;

    fn in_ten_days() -> NaiveDate {
        Local::now().date_naive() + Duration::days(10)
    }

    fn finished() -> Todo {
        Todo {
            id: 1,
            title: "Café".to_string(),
            done: true,
            priority: Priority::High,
            category: String::new(),
            created_at: Utc::now(),
            due_date: None,
        }
    }

    fn planned() -> Todo {
        Todo {
            id: 2,
            title: "Plan trip".to_string(),
            done: false,
            priority: Priority::Low,
            category: "work".to_string(),
            created_at: Utc::now(),
            due_date: Some(in_ten_days()),
        }
    }

    #[test]
    fn test_todos_table_layout() {
        let rendered = View::todos(&[finished(), planned()]);
        let plain = strip_ansi(&rendered);
        let lines: Vec<&str> = plain.lines().collect();
        let due = in_ten_days().format("%Y-%m-%d").to_string();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "│ ID │ ✓ │ Title     │ Priority │ Category │ Due        │");
        assert_eq!(lines[3], "│ 1  │ ✓ │ Café      │ high     │          │            │");
        assert_eq!(lines[4], format!("│ 2  │   │ Plan trip │ low      │ work     │ {} │", due));
    }

    #[test]
    fn test_todos_table_colors() {
        let rendered = View::todos(&[finished(), planned()]);
        let due = in_ten_days().format("%Y-%m-%d").to_string();

        assert_eq!(rendered.matches(&colorize(Color::Green, "✓")).count(), 1);
        assert!(rendered.contains(&colorize(Color::Red, "high")));
        assert!(rendered.contains(&colorize(Color::Green, "low")));
        assert!(rendered.contains(&colorize(Color::Green, &due)));
    }

    #[test]
    fn test_todos_table_empty() {
        assert_eq!(View::todos(&[]), "");
    }

    #[test]
    fn test_details_omit_unset_fields() {
        let card = strip_ansi(&View::todo_details(&finished())).into_owned();

        assert!(card.contains("  ID:        1"));
        assert!(card.contains("  Title:     Café"));
        assert!(card.contains("  Status:    Done"));
        assert!(card.contains("  Priority:  high"));
        assert!(card.contains("  Created:   "));
        assert!(!card.contains("Category:"));
        assert!(!card.contains("Due:"));
    }

    #[test]
    fn test_details_include_set_fields() {
        let card = strip_ansi(&View::todo_details(&planned())).into_owned();
        let due = in_ten_days().format("%Y-%m-%d").to_string();

        assert!(card.contains("  Status:    Pending"));
        assert!(card.contains("  Category:  work"));
        assert!(card.contains(&format!("  Due:       {}", due)));

        let lines: Vec<&str> = card.lines().collect();
        assert_eq!(lines.first(), lines.last());
        assert!(lines[0].starts_with('─'));
    }
}
