/// Tests for runner module
#[cfg(test)]
mod tests {
    use crate::config::{OutputFormat, PriceTypeSource, ReportConfig};
    use crate::runner::{build_report, run_report, write_report};
    use crate::types::ParseMode;
    use std::io::Write;

    /// Helper to create the default config
    fn create_config() -> ReportConfig {
        ReportConfig {
            input: None,
            min_stock: 3,
            parse_mode: ParseMode::Permissive,
            output_format: OutputFormat::Text,
            json_export: None,
            price_type_source: PriceTypeSource::Fixed,
        }
    }

    fn lines(text: &str) -> Vec<String> {
        build_report(text, &create_config()).unwrap().lines().into_iter().map(String::from).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            lines(""),
            vec!["Normal Price: 0 products", "Clearance Price: 0 products", "Price In Cart: 0 products"]
        );
    }

    #[test]
    fn test_single_normal_product() {
        assert_eq!(
            lines("Product,10.00,10.00,5,false"),
            vec!["Normal Price: 1 product @ $10.00", "Clearance Price: 0 products", "Price In Cart: 0 products"]
        );
    }

    #[test]
    fn test_mixed_clearance_normal_and_cart() {
        assert_eq!(
            lines("Product,10.00,8.00,4,true\nProduct,20.00,20.00,5,false\n"),
            vec!["Normal Price: 1 product @ $20.00", "Clearance Price: 1 product @ $8.00", "Price In Cart: 1 product"]
        );
    }

    #[test]
    fn test_below_stock_threshold_excluded() {
        assert_eq!(
            lines("Product,10.00,8.00,2,true"),
            vec!["Normal Price: 0 products", "Clearance Price: 0 products", "Price In Cart: 0 products"]
        );
    }

    #[test]
    fn test_price_range_across_products() {
        let text = "Type,normal,Normal Price\nProduct,30,12.5,3,false\nProduct,30,4,10,true\nProduct,9,9,7,true\n";
        assert_eq!(
            lines(text),
            vec![
                "Normal Price: 1 product @ $9.00",
                "Clearance Price: 2 products @ $4.00-$12.50",
                "Price In Cart: 2 products"
            ]
        );
    }

    #[test]
    fn test_half_cent_and_negative_zero_prices() {
        let text = "Product,10,4.125,5,false\nProduct,10,0.375,5,false\nProduct,1,-0,5,false\n Product ,9,9,5,false";
        assert_eq!(lines(text)[0], "Normal Price: 0 products");
        assert_eq!(lines(text)[1], "Clearance Price: 3 products @ $0.00-$4.13");
    }

    #[test]
    fn test_always_three_lines() {
        let text = (0..50).map(|i| format!("Product,{},{},{},true\n", 10 + i, 5 + i, i)).collect::<String>();
        assert_eq!(lines(&text).len(), 3);
        assert_eq!(lines("garbage\n\n,,,\n").len(), 3);
    }

    #[test]
    fn test_idempotent() {
        let text = "Product,10.00,8.00,4,true\nProduct,20.00,20.00,5,false\n";
        assert_eq!(build_report(text, &create_config()), build_report(text, &create_config()));
    }

    #[test]
    fn test_permissive_nan_flows_into_report() {
        let outcome = build_report("Product,abc,5.00,4,false\nProduct,10,8,x,true", &create_config()).unwrap();
        assert_eq!(outcome.total_products, 2);
        assert_eq!(outcome.available_products, 1);
        assert_eq!(outcome.lines()[0], "Normal Price: 1 product @ $5.00");
    }

    #[test]
    fn test_strict_mode_rejects() {
        let config = ReportConfig { parse_mode: ParseMode::Strict, ..create_config() };
        assert!(build_report("Product,abc,5.00,4,false", &config).is_err());
        assert!(build_report("Product,10,5.00,4,false", &config).is_ok());
    }

    #[test]
    fn test_input_price_types() {
        let config = ReportConfig { price_type_source: PriceTypeSource::Input, ..create_config() };
        let text = "Type,clearance,On Sale\nType,normal,Regular\nProduct,10,8,4,true\n";
        let outcome = build_report(text, &config).unwrap();
        assert_eq!(outcome.lines(), vec!["On Sale: 1 product @ $8.00", "Regular: 0 products"]);
    }

    #[test]
    fn test_run_report_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Product,10.00,10.00,5,false").unwrap();
        let config = ReportConfig { input: Some(file.path().to_path_buf()), ..create_config() };

        let outcome = run_report(&config).unwrap();
        assert_eq!(outcome.lines()[0], "Normal Price: 1 product @ $10.00");
    }

    #[test]
    fn test_run_report_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig { input: Some(dir.path().join("nope.txt")), ..create_config() };

        let outcome = run_report(&config).unwrap();
        assert_eq!(outcome.total_products, 0);
        assert_eq!(outcome.lines()[2], "Price In Cart: 0 products");
    }

    #[test]
    fn test_write_text_report() {
        let outcome = build_report("Product,10.00,8.00,4,true", &create_config()).unwrap();
        let mut buf = Vec::new();
        write_report(&outcome, OutputFormat::Text, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Normal Price: 0 products\nClearance Price: 1 product @ $8.00\nPrice In Cart: 1 product\n"
        );
    }

    #[test]
    fn test_write_json_report() {
        let outcome = build_report("Product,10.00,8.00,4,true\nProduct,1,1,1,true", &create_config()).unwrap();
        let mut buf = Vec::new();
        write_report(&outcome, OutputFormat::Json, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["total_products"], 2);
        assert_eq!(value["available_products"], 1);
        assert_eq!(value["categories"].as_array().unwrap().len(), 3);
        assert_eq!(value["categories"][1]["count"], 1);
        assert_eq!(value["categories"][1]["min_price"], 8.0);
    }
}
