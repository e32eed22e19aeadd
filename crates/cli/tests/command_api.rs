use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn run_cli_raw(workdir: &std::path::Path, request: &str) -> (bool, Value) {
    let output = Command::cargo_bin("edit-locator")
        .expect("binary")
        .current_dir(workdir)
        .arg("--quiet")
        .arg("command")
        .arg("--json")
        .arg(request)
        .output()
        .expect("command run");

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    (output.status.success(), body)
}

fn run_cli(workdir: &std::path::Path, request: &str) -> Value {
    let (ok, body) = run_cli_raw(workdir, request);
    assert!(ok, "stdout: {body}\nrequest: {request}");
    body
}

fn setup_project() -> tempfile::TempDir {
    let temp = tempdir().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("src/components")).unwrap();
    fs::write(
        root.join("src/App.jsx"),
        "import Header from './components/Header'\nimport Hero from './components/Hero'\n\nexport default function App() {\n  return (\n    <div>\n      <Header />\n      <Hero />\n    </div>\n  )\n}\n",
    )
    .unwrap();
    fs::write(
        root.join("src/components/Header.jsx"),
        "export default function Header() {\n  return <header className=\"bg-white\">Logo</header>\n}\n",
    )
    .unwrap();
    fs::write(
        root.join("src/components/Hero.jsx"),
        "export default function Hero() {\n  return (\n    <section>\n      <h1>Ship faster</h1>\n      <button className=\"bg-indigo-600\">Start Deploying</button>\n    </section>\n  )\n}\n",
    )
    .unwrap();
    fs::write(root.join("src/index.css"), "body { margin: 0; }\n").unwrap();
    temp
}

#[test]
fn classify_action_reports_intent_and_duration() {
    let temp = setup_project();
    let body = run_cli(
        temp.path(),
        r#"{"action":"classify","payload":{"path":".","prompt":"make the header blue"}}"#,
    );

    assert_eq!(body["status"], "ok");
    assert_eq!(body["data"]["type"], "UPDATE_STYLE");
    let targets = body["data"]["targetFiles"].as_array().unwrap();
    assert!(targets.iter().any(|t| t == "src/components/Header.jsx"));
    assert!(body["meta"]["duration_ms"].is_u64());
    assert_eq!(body["meta"]["files"], 4);
}

#[test]
fn locate_action_picks_the_button_line() {
    let temp = setup_project();
    let body = run_cli(
        temp.path(),
        r#"{"action":"locate","payload":{"path":".","prompt":"remove start deploying button"}}"#,
    );

    let data = &body["data"];
    assert_eq!(data["plan"]["searchTerms"][0], "start deploying");
    assert_eq!(data["search"]["searchType"], "exact");
    assert_eq!(data["target"]["filePath"], "src/components/Hero.jsx");
    assert_eq!(data["target"]["lineNumber"], 5);
}

#[test]
fn search_and_select_actions_work_on_inline_data() {
    let temp = setup_project();
    let search = run_cli(
        temp.path(),
        r#"{"action":"search","payload":{
            "plan":{"searchTerms":["Logo"],"fileTypesToSearch":[".jsx"]},
            "files":{"src/Nav.jsx":"export function Nav() {\n  return <nav>Logo</nav>\n}\n"}
        }}"#,
    );
    assert_eq!(search["data"]["success"], true);
    let results = search["data"]["results"].clone();
    assert_eq!(results[0]["lineNumber"], 2);

    let request = serde_json::json!({
        "action": "select",
        "payload": {"results": results, "editType": "REMOVE_ELEMENT"}
    });
    let select = run_cli(temp.path(), &request.to_string());
    assert_eq!(select["data"]["target"]["filePath"], "src/Nav.jsx");
    assert_eq!(select["data"]["target"]["reason"], "JSX element to remove");
}

#[test]
fn manifest_action_returns_manifest_and_stats() {
    let temp = setup_project();
    let body = run_cli(temp.path(), r#"{"action":"manifest","payload":{"path":"."}}"#);

    assert_eq!(body["data"]["manifest"]["entryPoint"], "src/App.jsx");
    assert_eq!(body["data"]["stats"]["files"], 4);
    assert_eq!(body["data"]["stats"]["stylesheets"], 1);
}

#[test]
fn invalid_payload_is_an_error_envelope() {
    let temp = setup_project();
    let (ok, body) = run_cli_raw(temp.path(), r#"{"action":"classify","payload":{}}"#);

    assert!(!ok);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"]["code"], "invalid_request");
    assert!(body["error"]["hint"].as_str().unwrap().contains("prompt"));
    assert!(body["data"].is_null());
}

#[test]
fn missing_project_directory_is_reported() {
    let temp = setup_project();
    let (ok, body) = run_cli_raw(
        temp.path(),
        r#"{"action":"classify","payload":{"path":"does-not-exist","prompt":"x"}}"#,
    );

    assert!(!ok);
    assert_eq!(body["error"]["code"], "invalid_path");
}
