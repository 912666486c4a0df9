use crate::domain::{FieldName, PropertyFeatures};
use crate::errors::ServerError;
use crate::form::{
    visitor_from_cookie_header, FormSnapshot, Notice, SubmissionController, SubmitOutcome,
    VISITOR_COOKIE,
};
use crate::responses::{
    html_response, json_error_response, json_response, static_file_response, ResultResp,
};
use crate::state::AppState;
use crate::templates::pages::{home_page, results_partial};
use astra::{Body, Request, Response, ResponseBuilder};
use http::header::{HeaderValue, COOKIE, SET_COOKIE};
use serde::Serialize;
use serde_json::json;
use std::io::Read;

/// Form posts are seven short fields; anything bigger is not ours.
const MAX_BODY_BYTES: u64 = 16 * 1024;

/// Routes that act on the visitor's form. Only these mint a visitor.
const FORM_ROUTES: [(&str, &str); 8] = [
    ("GET", "/"),
    ("POST", "/predict"),
    ("GET", "/prediction"),
    ("POST", "/field"),
    ("POST", "/cancel"),
    ("POST", "/reset"),
    ("GET", "/api/prediction"),
    ("POST", "/api/prediction"),
];

pub fn handle(mut req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    if method == "GET" {
        if let Some(rel) = path.strip_prefix("/static/") {
            return static_file_response(&app.static_dir, rel);
        }
    }

    if !FORM_ROUTES.contains(&(method.as_str(), path.as_str())) {
        tracing::debug!(%method, %path, "no such route");
        return Err(ServerError::NotFound);
    }

    let cookie = req
        .headers()
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(visitor_from_cookie_header)
        .map(str::to_string);
    let (visitor_id, form, is_new) = app.forms.checkout(cookie.as_deref());
    let is_htmx = req.headers().contains_key("HX-Request");

    let resp = dispatch(&method, &path, &mut req, &form, is_htmx);

    if let Err(err) = &resp {
        tracing::warn!(%method, %path, error = %err, "request failed");
    }

    let resp = resp?;
    if is_new {
        with_visitor_cookie(resp, &visitor_id)
    } else {
        Ok(resp)
    }
}

fn dispatch(
    method: &str,
    path: &str,
    req: &mut Request,
    form: &SubmissionController,
    is_htmx: bool,
) -> ResultResp {
    match (method, path) {
        ("GET", "/") => {
            let notices = form.take_notices();
            html_response(home_page(&form.snapshot(), &notices))
        }

        ("POST", "/predict") => {
            let body = read_body(req)?;
            let features = parse_form(&body)?;
            form.submit_with(features);

            let notices = form.take_notices();
            if is_htmx {
                html_response(results_partial(&form.snapshot(), &notices))
            } else {
                html_response(home_page(&form.snapshot(), &notices))
            }
        }

        ("GET", "/prediction") => {
            let notices = form.take_notices();
            html_response(results_partial(&form.snapshot(), &notices))
        }

        ("POST", "/field") => {
            let body = read_body(req)?;
            for (name, value) in url::form_urlencoded::parse(body.as_bytes()) {
                let field: FieldName = name.parse()?;
                form.update_field(field, value);
            }
            no_content()
        }

        ("POST", "/cancel") => {
            form.cancel();
            html_response(results_partial(&form.snapshot(), &[]))
        }

        ("POST", "/reset") => {
            form.reset();
            html_response(results_partial(&form.snapshot(), &[]))
        }

        ("GET", "/api/prediction") => {
            api_get(form).or_else(|err| Ok(json_error_response(&err)))
        }

        ("POST", "/api/prediction") => {
            api_submit(req, form).or_else(|err| Ok(json_error_response(&err)))
        }

        _ => Err(ServerError::NotFound),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiSnapshot {
    #[serde(flatten)]
    form: FormSnapshot,
    notices: Vec<Notice>,
}

fn api_get(form: &SubmissionController) -> ResultResp {
    let snapshot = ApiSnapshot {
        notices: form.take_notices(),
        form: form.snapshot(),
    };
    json_response(200, &snapshot)
}

fn api_submit(req: &mut Request, form: &SubmissionController) -> ResultResp {
    let body = read_body(req)?;
    let features: PropertyFeatures = serde_json::from_str(&body)
        .map_err(|e| ServerError::BadRequest(format!("invalid features json: {e}")))?;

    match form.submit_with(features) {
        SubmitOutcome::Accepted => json_response(
            202,
            &json!({ "status": "accepted", "prediction": form.snapshot() }),
        ),
        SubmitOutcome::Rejected(err) => {
            let missing: Vec<&str> = err.missing.iter().map(|f| f.wire_name()).collect();
            json_response(
                422,
                &json!({
                    "status": "rejected",
                    "reason": err.reason(),
                    "message": err.to_string(),
                    "missingFields": missing,
                }),
            )
        }
    }
}

/// Reads one byte past the limit so an oversized body is refused rather than
/// cut short.
fn read_body(req: &mut Request) -> Result<String, ServerError> {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

    if body.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("request body too large".into()));
    }
    Ok(body)
}

/// Decodes an urlencoded form post into features. Fields the browser left
/// out stay empty.
fn parse_form(body: &str) -> Result<PropertyFeatures, ServerError> {
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect();

    PropertyFeatures::from_form_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

fn no_content() -> ResultResp {
    ResponseBuilder::new()
        .status(204)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

fn with_visitor_cookie(mut resp: Response, visitor_id: &str) -> ResultResp {
    let cookie = format!("{VISITOR_COOKIE}={visitor_id}; Path=/; HttpOnly; SameSite=Lax");
    let value = HeaderValue::from_str(&cookie).map_err(|_| ServerError::InternalError)?;
    resp.headers_mut().insert(SET_COOKIE, value);
    Ok(resp)
}
