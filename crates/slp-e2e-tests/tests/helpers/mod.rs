//! Shared harness: a temp directory holding one input log and the report.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde_json::Value;
use slp_cli::config::AppConfig;
use slp_report::{LineEnding, ReportConfig};
use tempfile::TempDir;

pub struct TestHarness {
    dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn input_path(&self) -> PathBuf {
        self.path("a.json")
    }

    pub fn output_path(&self) -> PathBuf {
        self.path("Result.txt")
    }

    /// Write raw text as the input document.
    pub fn write_input_raw(&self, text: &str) -> PathBuf {
        let path = self.input_path();
        std::fs::write(&path, text).expect("write input");
        path
    }

    pub fn write_input(&self, doc: &Value) -> PathBuf {
        self.write_input_raw(&doc.to_string())
    }

    /// Report config pointing at this harness, LF separators.
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::default()
            .with_input_path(Some(self.input_path()))
            .with_output_path(self.output_path())
            .with_line_ending(LineEnding::Lf)
    }

    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            report: self.report_config(),
            ..AppConfig::default()
        }
    }

    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.output_path()).expect("read report")
    }

    pub fn output_exists(&self) -> bool {
        Path::new(&self.output_path()).exists()
    }
}

/// A realistic settings-resolution log with nested settings.
pub fn sample_log() -> Value {
    serde_json::json!({
        "RequestGuId": "9d4c2b1a-0e7f-4a3b-8c6d-5e4f3a2b1c0d",
        "UserData": "Gcid=1001;InstrumentId=1234;IsBuy=true",
        "LogicLog": [
            "Resolving open position settings for Gcid 1001",
            "LeverageSettings: PossibleLeverages [1,2,5], default 1",
            "MaxStopLossPercentageMatrix: leveraged 50/50, non-leveraged 100/100",
            "MinPositionAmount: 10 (absolute 50)",
            "BlockedByCompliance: false"
        ],
        "LatencyTicks": ["12", "48", "7", "3"],
        "OpenPositionSettings": {
            "Gcid": 1001,
            "InstrumentTypeID": 5,
            "IsBuy": true,
            "Leverage": 2,
            "LeverageSettings": {
                "GCID": 1001,
                "InstrumentID": 1234,
                "PossibleLeverages": [1, 2, 5],
                "PotentialDisplayLeverages": [{"Value": 1, "Label": "X1"}],
                "DefaultValue": 1,
                "MaxLeverage": 5,
                "MinLevergae": 1
            },
            "BlockedByCompliance": false,
            "FutureRuleSet": {"Version": 3, "Rules": [{"Nested": {"Deeper": [null, true]}}]}
        }
    })
}
