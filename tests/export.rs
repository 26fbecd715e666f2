#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use coursework::libs::export::{ExportFormat, Exporter};
    use coursework::libs::index::TaskIndex;
    use coursework::libs::report::{categorize_and_sort, default_period_start};
    use coursework::libs::task::{Priority, Task};
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const DATE_FORMAT: &str = "%Y-%m-%d";

    struct ExportTestContext {
        temp_dir: TempDir,
        index: TaskIndex,
        now: DateTime<Utc>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let now = Utc.with_ymd_and_hms(2025, 4, 10, 12, 0, 0).unwrap();
            let mut index = TaskIndex::new();
            index.insert(Task {
                name: Some("Essay, first draft".to_string()),
                course: Some("Philosophy".to_string()),
                total_minutes: 240,
                used_minutes: 60,
                priority: Priority::High,
                ..Task::default()
            });
            index.insert(Task {
                name: Some("Problem set".to_string()),
                total_minutes: 90,
                expires_at: Some(now - Duration::days(1)),
                ..Task::default()
            });
            index.insert(Task {
                name: Some("Quiz".to_string()),
                total_minutes: 30,
                used_minutes: 30,
                completed_at: Some(now - Duration::days(2)),
                ..Task::default()
            });

            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                index,
                now,
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_tasks_csv(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.csv");
        Exporter::new(ExportFormat::Csv, Some(path.clone()), DATE_FORMAT)
            .export_tasks(&ctx.index, ctx.now)
            .unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "ID");
        assert_eq!(&headers[11], "Completion");

        let rows: Vec<csv::StringRecord> = reader.records().map(|row| row.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][1], "Essay, first draft");
        assert_eq!(&rows[0][4], "HIGH");
        assert_eq!(&rows[0][5], "ongoing");
        assert_eq!(&rows[0][11], "25%");
        assert_eq!(&rows[1][5], "expired");
        assert_eq!(&rows[1][2], "");
        assert_eq!(&rows[2][5], "completed");
        assert_eq!(&rows[2][9], "00:30");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_tasks_json(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.json");
        Exporter::new(ExportFormat::Json, Some(path.clone()), DATE_FORMAT)
            .export_tasks(&ctx.index, ctx.now)
            .unwrap();

        let exported: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let tasks = exported.as_array().unwrap();
        let ids: Vec<u64> = tasks.iter().filter_map(|task| task["id"].as_u64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(tasks[0]["used"], "01:00");
        assert_eq!(tasks[0]["total"], "04:00");
        assert_eq!(tasks[0]["completion"], 25);
        assert_eq!(tasks[1]["inserted_at"], "-");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_report_json(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("report.json");
        let report = categorize_and_sort(&ctx.index, default_period_start(ctx.now, 7), ctx.now);
        Exporter::new(ExportFormat::Json, Some(path.clone()), DATE_FORMAT)
            .export_report(&report)
            .unwrap();

        let exported: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let section_len = |name: &str| exported[name].as_array().map(Vec::len);
        assert_eq!(section_len("completed"), Some(1));
        assert_eq!(section_len("ongoing"), Some(1));
        assert_eq!(section_len("expired"), Some(1));
        assert_eq!(section_len("yet_to_begin"), Some(0));
        assert_eq!(exported["expired"][0]["name"], "Problem set");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_report_csv_sections(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("report.csv");
        let report = categorize_and_sort(&ctx.index, default_period_start(ctx.now, 7), ctx.now);
        let exporter = Exporter::new(ExportFormat::Csv, Some(path.clone()), DATE_FORMAT);
        exporter.export_report(&report).unwrap();
        assert_eq!(exporter.output_path(), path.as_path());

        let content = fs::read_to_string(&path).unwrap();
        for title in ["COMPLETED", "YET TO BEGIN", "ONGOING", "EXPIRED"] {
            assert!(content.lines().any(|line| line == title), "missing section {}", title);
        }
        assert!(content.contains("Problem set"));
    }

    #[test]
    fn test_default_output_name() {
        let exporter = Exporter::new(ExportFormat::Json, None, DATE_FORMAT);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("coursework_export_"));
        assert!(name.ends_with(".json"));
    }
}
