#[cfg(test)]
mod tests {
    use todo_cli::libs::color::{colorize, Color};
    use todo_cli::libs::table::{strip_ansi, visible_width, Table};

    #[test]
    fn test_new_table_widths_from_headers() {
        let table = Table::new(["ID", "Title", "Status"]);
        assert_eq!(table.widths(), &[2, 5, 6]);
        assert_eq!(table.headers(), &["ID", "Title", "Status"]);
        assert!(table.rows().is_empty());

        let table = Table::new(["Name"]);
        assert_eq!(table.widths(), &[4]);
    }

    #[test]
    fn test_new_table_empty_headers() {
        let table = Table::new(Vec::<String>::new());
        assert!(table.widths().is_empty());
        assert!(table.headers().is_empty());
    }

    #[test]
    fn test_new_table_unicode_headers_count_characters() {
        let table = Table::new(["✓", "名前"]);
        assert_eq!(table.widths(), &[1, 2]);
    }

    #[test]
    fn test_add_row_widens_columns() {
        let mut table = Table::new(["ID", "Title"]);

        table.add_row(["1", "Short"]);
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.widths()[1], 5);

        table.add_row(["2", "Much longer title here"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.widths()[1], 22);

        // Widths never shrink
        table.add_row(["3", "x"]);
        assert_eq!(table.widths()[1], 22);
    }

    #[test]
    fn test_add_row_ignores_ansi_codes() {
        let mut table = Table::new(["Status"]);
        table.add_row([colorize(Color::Green, "Done")]);
        assert_eq!(table.widths()[0], 6);

        let mut table = Table::new(["S"]);
        table.add_row([colorize(Color::Green, "Done")]);
        assert_eq!(table.widths()[0], 4);
    }

    #[test]
    fn test_add_row_shorter_than_headers() {
        let mut table = Table::new(["A", "B", "C"]);
        table.add_row(["1"]);
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.widths(), &[1, 1, 1]);
    }

    #[test]
    fn test_add_row_extra_cells_do_not_add_columns() {
        let mut table = Table::new(["A"]);
        table.add_row(["1", "overflowing cell"]);
        assert_eq!(table.widths(), &[1]);
        assert!(!table.render().contains("overflowing"));
    }

    #[test]
    fn test_render_empty_table_is_empty() {
        let table = Table::new(["ID", "Title"]);
        assert!(table.is_empty());
        assert_eq!(table.render(), "");
    }

    #[test]
    fn test_render_layout() {
        let mut table = Table::new(["ID", "Title"]);
        table.add_row(["1", "Short"]);
        table.add_row(["10", "A longer one"]);

        let expected = [
            "┌────┬──────────────┐",
            "│ ID │ Title        │",
            "├────┼──────────────┤",
            "│ 1  │ Short        │",
            "│ 10 │ A longer one │",
            "└────┴──────────────┘",
        ]
        .join("\n")
            + "\n";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_render_pads_missing_cells() {
        let mut table = Table::new(["A", "B"]);
        table.add_row(["1"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[3], "│ 1 │   │");
    }

    #[test]
    fn test_render_colored_cells_keep_alignment() {
        let mut table = Table::new(["Status", "Title"]);
        table.add_row([colorize(Color::Green, "Done"), "Write tests".to_string()]);
        table.add_row(["".to_string(), "Ship".to_string()]);

        let rendered = table.render();
        let widths: Vec<usize> = rendered.lines().map(visible_width).collect();
        assert!(widths.iter().all(|w| *w == widths[0]), "uneven lines: {:?}", widths);
        assert!(rendered.contains(&colorize(Color::Green, "Done")));
    }

    #[test]
    fn test_render_unicode_cells_keep_alignment() {
        let mut table = Table::new(["✓", "Title"]);
        table.add_row(["✓", "Café crème"]);
        table.add_row([" ", "名前"]);

        let rendered = table.render();
        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]), "uneven lines: {:?}", widths);
    }

    #[test]
    fn test_strip_ansi() {
        assert_eq!(strip_ansi("plain text"), "plain text");
        assert_eq!(strip_ansi("\x1b[31mred text\x1b[0m"), "red text");
        assert_eq!(strip_ansi("\x1b[1m\x1b[32mbold green\x1b[0m"), "bold green");
        assert_eq!(strip_ansi("\x1b[1;31mcombined\x1b[0m"), "combined");
        assert_eq!(strip_ansi(""), "");
    }

    #[test]
    fn test_visible_width() {
        assert_eq!(visible_width("\x1b[33mmedium\x1b[0m"), 6);
        assert_eq!(visible_width("名前"), 2);
        assert_eq!(visible_width(""), 0);
    }
}
