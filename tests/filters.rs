#[cfg(test)]
mod tests {
    use todo_cli::db::db::Db;
    use todo_cli::db::todos::Todos;
    use todo_cli::libs::todo::{Priority, TodoFilter};
    use test_context::{test_context, TestContext};

    /// Three todos: high/work, low/personal (done), high/work.
    struct FilterTestContext {
        todos: Todos,
    }

    impl TestContext for FilterTestContext {
        fn setup() -> Self {
            let mut todos = Todos::new(Db::in_memory().unwrap());
            todos.insert("Task 1", Priority::High, "work", None).unwrap();
            todos.insert("Task 2", Priority::Low, "personal", None).unwrap();
            todos.insert("Task 3", Priority::High, "work", None).unwrap();
            todos.set_status(2, true).unwrap();
            FilterTestContext { todos }
        }
    }

    fn count(ctx: &FilterTestContext, filter: TodoFilter) -> usize {
        ctx.todos.fetch(&filter).unwrap().len()
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_all_todos(ctx: &mut FilterTestContext) {
        assert_eq!(count(ctx, TodoFilter { show_all: true, ..Default::default() }), 3);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_pending_only_by_default(ctx: &mut FilterTestContext) {
        let pending = ctx.todos.fetch(&TodoFilter::default()).unwrap();
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|t| !t.done));
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_done_only(ctx: &mut FilterTestContext) {
        let done = ctx.todos.fetch(&TodoFilter { show_done: true, ..Default::default() }).unwrap();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].title, "Task 2");
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_done_wins_over_all(ctx: &mut FilterTestContext) {
        let filter = TodoFilter { show_all: true, show_done: true, ..Default::default() };
        assert_eq!(count(ctx, filter), 1);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_filter_by_priority(ctx: &mut FilterTestContext) {
        let filter = TodoFilter { show_all: true, priority: Some(Priority::High), ..Default::default() };
        assert_eq!(count(ctx, filter), 2);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_filter_by_category(ctx: &mut FilterTestContext) {
        let filter = TodoFilter { show_all: true, category: Some("work".into()), ..Default::default() };
        assert_eq!(count(ctx, filter), 2);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_filter_by_priority_and_category(ctx: &mut FilterTestContext) {
        let filter = TodoFilter {
            show_all: true,
            priority: Some(Priority::Low),
            category: Some("personal".into()),
            ..Default::default()
        };
        assert_eq!(count(ctx, filter), 1);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_filters_combine_with_status(ctx: &mut FilterTestContext) {
        // The only low/personal todo is done, so the pending listing excludes it
        let filter = TodoFilter { priority: Some(Priority::Low), ..Default::default() };
        assert_eq!(count(ctx, filter), 0);

        let filter = TodoFilter { show_done: true, category: Some("work".into()), ..Default::default() };
        assert_eq!(count(ctx, filter), 0);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_empty_category_is_no_restriction(ctx: &mut FilterTestContext) {
        let filter = TodoFilter { show_all: true, category: Some(String::new()), ..Default::default() };
        assert_eq!(count(ctx, filter), 3);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_unknown_category_is_empty_not_error(ctx: &mut FilterTestContext) {
        let filter = TodoFilter { show_all: true, category: Some("garden".into()), ..Default::default() };
        assert_eq!(count(ctx, filter), 0);
    }
}
