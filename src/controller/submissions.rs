use std::str::FromStr;

use actix_web::http::header::ContentType;
use actix_web::{get, post, web, Either, HttpResponse, Responder};

use serde::Deserialize;

use crate::error::{Error, RestError, RestResult};
use crate::model::{NewSubmission, Submission};
use crate::repo::SubmissionStore;
use crate::telemetry::spawn_blocking_with_tracing;
use crate::templates;

const MISSING_FIELDS: &str = "Please fill in all required fields.";

/// Submission form, accepted as url-encoded or JSON
#[derive(Debug, Deserialize)]
pub struct NewSubmissionForm {
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    voucher: Option<String>,
}

impl TryFrom<NewSubmissionForm> for NewSubmission {
    type Error = RestError;

    fn try_from(form: NewSubmissionForm) -> RestResult<Self> {
        Ok(NewSubmission {
            name: required(form.name)?,
            phone: required(form.phone)?,
            email: required(form.email)?,
            address: form.address.as_deref().unwrap_or_default().parse()?,
            voucher: required(form.voucher)?,
        })
    }
}

/// Absent and blank values get the same message the form shows for either
fn required<T: FromStr<Err = Error>>(value: Option<String>) -> RestResult<T> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Err(RestError::ParseError(MISSING_FIELDS.into())),
        Some(value) => Ok(value.parse()?),
    }
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(templates::render_index_page())
}

#[tracing::instrument(name = "Create a new submission", skip(store, form))]
#[post("/submit")]
async fn create(
    store: web::Data<dyn SubmissionStore>,
    form: Either<web::Form<NewSubmissionForm>, web::Json<NewSubmissionForm>>,
) -> RestResult<impl Responder> {
    let form = match form {
        Either::Left(form) => form.into_inner(),
        Either::Right(json) => json.into_inner(),
    };
    let new_submission: NewSubmission = form.try_into()?;

    let name = new_submission.name.to_string();
    let record = Submission::from(new_submission);
    tracing::info!(submission.id = %record.id, "Accepted voucher submission");

    let store = store.into_inner();
    spawn_blocking_with_tracing(move || store.append(record)).await??;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(templates::render_thank_you_page(&name)))
}

/// Public endpoints, mounted at the site root
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(create);
}
