use std::path::PathBuf;

use egui_kittest::Harness;
use triggers_business::ProblemSnapshot;
use triggers_ui::TriggersApp;
use triggers_ui::config::Config;
use triggers_ui::state::State;

/// Snapshot JSON as the data-fetch side writes it.
pub const SNAPSHOT_JSON: &str = r##"{
  "loading": false,
  "panelOptions": { "hostField": true, "severityField": true, "hostGroups": false },
  "problems": [
    {
      "triggerid": "13491",
      "host": "db-01",
      "hostTechName": "db01.internal",
      "groups": [{ "groupid": "2", "name": "Linux servers" }],
      "proxy": "proxy-eu",
      "priority": "4",
      "severity": "High",
      "color": "#E97659",
      "value": "1",
      "description": "MySQL is down",
      "tags": [{ "tag": "service", "value": "mysql" }],
      "lastchange": "2026-01-04 10:00:00",
      "age": "2h 5m",
      "comments": "Restart via runbook 12",
      "type": "1",
      "items": [{ "itemid": "301", "name": "MySQL status", "lastvalue": "0" }],
      "acknowledges": [
        { "acknowledgeid": "9", "time": "2026-01-04 10:10", "user": "alice", "message": "On it" }
      ],
      "datasource": "Zabbix EU",
      "maintenance": true
    },
    {
      "triggerid": "13492",
      "host": "web-01",
      "hostTechName": "web01.internal",
      "priority": 2,
      "severity": "Warning",
      "color": "rgb(255, 200, 89)",
      "value": "0",
      "description": "High response time",
      "lastchange": "2026-01-04 09:00:00",
      "age": "3h",
      "datasource": "Zabbix EU"
    }
  ]
}"##;

pub fn snapshot() -> ProblemSnapshot {
    ProblemSnapshot::from_json_str(SNAPSHOT_JSON).expect("fixture snapshot should parse")
}

/// Writes `contents` to a per-test file under the system temp directory.
pub fn write_snapshot_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("triggers-ui-{}-{name}.json", std::process::id()));
    std::fs::write(&path, contents).expect("snapshot file should be writable");
    path
}

pub fn app_harness(state: State) -> Harness<'static, TriggersApp> {
    let app = TriggersApp::new(state);
    Harness::new_eframe(|_| app)
}

pub fn app_with_fixture() -> Harness<'static, TriggersApp> {
    app_harness(State::with_snapshot(Config::default(), snapshot()))
}
