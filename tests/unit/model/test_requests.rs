use serde_json::json;
use stream_client::model::requests::{LogicalMethod, ObjCode, Params, build_form};

#[test]
fn test_obj_code_constants() {
    assert_eq!(ObjCode::GROUP.as_str(), "GROUP");
    assert_eq!(ObjCode::PROJECT.as_str(), "PROJ");
    assert_eq!(ObjCode::TASK.as_str(), "TASK");
    assert_eq!(ObjCode::from("TASK"), ObjCode::TASK);
    assert_eq!(ObjCode::from(String::from("OPTASK")).to_string(), "OPTASK");
}

#[test]
fn test_logical_method_names() {
    assert_eq!(LogicalMethod::Get.to_string(), "GET");
    assert_eq!(LogicalMethod::Post.to_string(), "POST");
    assert_eq!(LogicalMethod::Put.to_string(), "PUT");
    assert_eq!(LogicalMethod::Delete.as_str(), "DELETE");
}

#[test]
fn test_params_coerce_values_to_strings() {
    let params = Params::new()
        .with("name", "Sample")
        .with("priority", 3)
        .with("force", true);
    assert_eq!(params.get("name"), Some("Sample"));
    assert_eq!(params.get("priority"), Some("3"));
    assert_eq!(params.get("force"), Some("true"));
    assert_eq!(params.len(), 3);
}

#[test]
fn test_params_from_json_object() {
    let params = Params::from_json(&json!({
        "name": "Sample",
        "percentComplete": 50,
        "milestone": false,
        "description": null
    }))
    .unwrap();
    assert_eq!(params.get("name"), Some("Sample"));
    assert_eq!(params.get("percentComplete"), Some("50"));
    assert_eq!(params.get("milestone"), Some("false"));
    assert_eq!(params.get("description"), Some(""));
}

#[test]
fn test_params_from_json_rejects_non_objects() {
    assert!(Params::from_json(&json!(["a", "b"])).is_err());
}

#[test]
fn test_build_form_keeps_caller_params() {
    let params = Params::from([("name", "Task"), ("projectID", "P1")]);
    let form = build_form(Some(&params), LogicalMethod::Post, Some("abc"), &[]);

    assert_eq!(form.get("name"), Some("Task"));
    assert_eq!(form.get("projectID"), Some("P1"));
    assert_eq!(form.get("method"), Some("POST"));
    assert_eq!(form.get("sessionID"), Some("abc"));
    assert!(!form.contains_key("fields"));
    // The caller's map is copied, not mutated
    assert_eq!(params.len(), 2);
}

#[test]
fn test_build_form_without_session_sends_empty_token() {
    let form = build_form(None, LogicalMethod::Get, None, &[]);
    assert_eq!(form.get("method"), Some("GET"));
    assert_eq!(form.get("sessionID"), Some(""));
    assert_eq!(form.len(), 2);
}

#[test]
fn test_build_form_injected_values_win() {
    let params = Params::from([
        ("method", "DELETE"),
        ("sessionID", "forged"),
        ("fields", "ID"),
        ("name", "Task"),
    ]);
    let form = build_form(
        Some(&params),
        LogicalMethod::Put,
        Some("real"),
        &["status", "extRefID"],
    );
    assert_eq!(form.get("method"), Some("PUT"));
    assert_eq!(form.get("sessionID"), Some("real"));
    assert_eq!(form.get("fields"), Some("status,extRefID"));
    assert_eq!(form.get("name"), Some("Task"));
}

#[test]
fn test_build_form_drops_caller_fields_without_list() {
    let params = Params::from([("fields", "*"), ("name", "Task")]);
    let form = build_form(Some(&params), LogicalMethod::Get, Some("abc"), &[]);
    assert!(!form.contains_key("fields"));
    assert_eq!(form.get("name"), Some("Task"));
    assert_eq!(form.len(), 3);
}

#[test]
fn test_build_form_joins_fields_in_order() {
    let form = build_form(
        None,
        LogicalMethod::Get,
        Some("abc"),
        &["assignments", "status", "extRefID"],
    );
    assert_eq!(form.get("fields"), Some("assignments,status,extRefID"));
}

#[test]
fn test_form_encoding_is_deterministic() {
    let params = Params::from([("name", "A & B"), ("description", "x=y")]);
    let form = build_form(Some(&params), LogicalMethod::Post, Some("s1"), &["ID"]);
    let encoded = serde_json::to_value(&form).unwrap();
    assert_eq!(
        encoded,
        json!({
            "description": "x=y",
            "fields": "ID",
            "method": "POST",
            "name": "A & B",
            "sessionID": "s1"
        })
    );
    let keys: Vec<&str> = form.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["description", "fields", "method", "name", "sessionID"]);
}
