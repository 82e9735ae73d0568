use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use calculus::{
    engine::evaluator::EvalOptions,
    service::{Body, Outcome, Status, calculate, route},
};

fn get(expr: &str) -> calculus::service::Response {
    route("/calculus", Some(&BASE64.encode(expr)), EvalOptions::default())
}

#[test]
fn complicated_brackets_are_solved() {
    let response = get("1 + (1(1+1(1-1+1) -1) +1*1/1 -1)");
    assert_eq!(response.status.code(), 200);
    assert_eq!(response.render().unwrap(), r#"{"result":2.0,"error":false}"#);
}

#[test]
fn bad_query_is_a_client_error() {
    let response = get("bad query");
    assert_eq!(response.status, Status::BadRequest);

    let json: serde_json::Value = serde_json::from_str(&response.render().unwrap()).unwrap();
    assert_eq!(json["error"], serde_json::Value::Bool(true));
}

#[test]
fn floats_are_supported() {
    let response = get("4.5+2.3");
    assert_eq!(response.status, Status::Ok);
    assert_eq!(response.body,
               Body::Json(Outcome::Solved { result: 6.8,
                                            error:  false, }));
}

#[test]
fn repeated_decimal_points_are_rejected() {
    let response = get("4.5+6.4.5");
    assert_eq!(response.status.code(), 400);
}

#[test]
fn rejection_message_echoes_the_query_and_its_decoding() {
    let query = BASE64.encode("1 + (4 + 5");
    let response = calculate(&query, EvalOptions::default());
    assert_eq!(response.body,
               Body::Json(Outcome::Failed { message: format!("Invalid input string {query} - decoded to 1+(4+5"),
                                            error:   true, }));
}

#[test]
fn undecodable_query_is_a_client_error() {
    let response = route("/calculus", Some("!!!"), EvalOptions::default());
    assert_eq!(response.status, Status::BadRequest);
    assert!(response.render()
                    .unwrap()
                    .contains("Unable to decode the string !!!"));
}

#[test]
fn missing_query_is_a_client_error() {
    let response = route("/calculus", None, EvalOptions::default());
    assert_eq!(response.status, Status::BadRequest);
}

#[test]
fn unknown_path_is_not_found() {
    let response = route("/docs", None, EvalOptions::default());
    assert_eq!(response.status.code(), 404);
    assert!(matches!(response.body, Body::Html(page) if page.contains("PAGE NOT FOUND")));
}
