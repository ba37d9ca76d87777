//! Tests for the JSON run report

#[cfg(test)]
mod tests {
    use schelling::SimulationConfig;
    use schelling::algorithm::convergence::RunState;
    use schelling::algorithm::tolerance::Tolerances;
    use schelling::analysis::satisfaction::SatisfactionSeries;
    use schelling::io::report::RunReport;
    use tempfile::TempDir;

    // Tests the report carries parameters, state and history
    // Verified by omitting the seed field
    #[test]
    fn test_export_json_fields() {
        let dir = TempDir::new().expect("temporary directory");
        let path = dir.path().join("reports").join("satisfaction.json");
        let config = SimulationConfig {
            board_size: 20,
            population_size: 300,
            tolerances: Tolerances {
                high: 0.25,
                low: 0.5,
            },
            search_radius: 5,
        };
        let mut series = SatisfactionSeries::new();
        series.record(0, 60, 70);
        series.record(1, 100, 100);

        RunReport::new(&config, 9, RunState::Converged, 2, &series)
            .export_json(&path)
            .expect("export succeeds");

        let text = std::fs::read_to_string(&path).expect("readable report");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");

        assert_eq!(value["board_size"], 20);
        assert_eq!(value["population_size"], 300);
        assert_eq!(value["tolerance_high"], 0.25);
        assert_eq!(value["seed"], 9);
        assert_eq!(value["state"], "converged");
        assert_eq!(value["iterations"], 2);
        assert_eq!(value["satisfaction"]["samples"][1]["high"], 100);
        assert_eq!(
            value["satisfaction"]["samples"]
                .as_array()
                .map(Vec::len),
            Some(2)
        );
    }

    // Tests the budget state serializes in snake case
    // Verified by serializing the variant name unchanged
    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_string(&RunState::BudgetExhausted).expect("serializable");

        assert_eq!(json, "\"budget_exhausted\"");
    }
}
