//! Route handlers

use super::pages;
use super::progress::LogProgress;
use super::{AppState, InquiryBackend, SetupError};
use actix_web::{HttpResponse, Responder, web};
use crew_application::{InquiryReport, InquiryRequest, ProcessInquiryError};
use crew_domain::{CUSTOM_OPTION, CompanySelection};
use serde::Deserialize;
use tracing::warn;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(form_page)));
    cfg.service(web::resource("/inquiry").route(web::post().to(submit_form)));
    cfg.service(web::resource("/api/inquiries").route(web::post().to(submit_json)));
    cfg.service(web::resource("/api/health").route(web::get().to(health_check)));
    cfg.service(web::resource("/api/companies").route(web::get().to(list_companies)));
    cfg.service(web::resource("/api/status").route(web::get().to(get_status)));
}

/// Fields posted by the HTML form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InquiryFormData {
    pub company: String,
    pub custom_company: String,
    pub customer: String,
    pub person: String,
    pub inquiry: String,
    pub api_key: String,
}

impl InquiryFormData {
    fn into_parts(self, default_company: &str) -> (InquiryRequest, Option<String>) {
        let selection = if self.company == CUSTOM_OPTION {
            CompanySelection::Custom(self.custom_company)
        } else if self.company.trim().is_empty() {
            CompanySelection::from_input(default_company)
        } else {
            CompanySelection::from_input(&self.company)
        };

        let request = InquiryRequest::new(
            self.customer,
            self.person,
            self.inquiry,
            selection.company_name(),
        );
        (request, non_blank(self.api_key))
    }
}

/// JSON body of `POST /api/inquiries`
#[derive(Debug, Deserialize)]
pub struct ApiInquiry {
    #[serde(flatten)]
    pub request: InquiryRequest,
    #[serde(default)]
    pub api_key: Option<String>,
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

enum Outcome {
    Report(InquiryReport),
    Refused(String),
    Setup(SetupError),
    Failed(String),
}

async fn process(backend: &dyn InquiryBackend, request: InquiryRequest, api_key: Option<&str>) -> Outcome {
    // Refuse before touching the credential
    if let Err(e) = request.inputs.validate() {
        return Outcome::Refused(e.to_string());
    }

    let use_case = match backend.use_case(api_key) {
        Ok(use_case) => use_case,
        Err(e) => {
            warn!("Setup failed: {}", e);
            return Outcome::Setup(e);
        }
    };

    let progress = LogProgress {
        customer: request.inputs.customer.clone(),
    };
    match use_case.execute(&request, &progress).await {
        Ok(report) => Outcome::Report(report),
        Err(e @ ProcessInquiryError::MissingField(_)) => Outcome::Refused(e.to_string()),
        Err(e) => Outcome::Failed(e.to_string()),
    }
}

async fn form_page(state: web::Data<AppState>) -> impl Responder {
    let backend = &state.backend;
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(pages::form_page(backend.default_company(), &backend.status()))
}

async fn submit_form(state: web::Data<AppState>, form: web::Form<InquiryFormData>) -> impl Responder {
    let backend = state.backend.as_ref();
    let (request, api_key) = form.into_inner().into_parts(backend.default_company());

    let (mut response, body) = match process(backend, request, api_key.as_deref()).await {
        Outcome::Report(report) => (HttpResponse::Ok(), pages::result_page(&report)),
        Outcome::Refused(_) => (HttpResponse::BadRequest(), pages::refusal_page()),
        Outcome::Setup(e) => (HttpResponse::ServiceUnavailable(), pages::setup_error_page(&e.0)),
        Outcome::Failed(message) => (HttpResponse::BadGateway(), pages::error_page(&message)),
    };

    response.content_type("text/html; charset=utf-8").body(body)
}

async fn submit_json(state: web::Data<AppState>, body: web::Json<ApiInquiry>) -> impl Responder {
    let ApiInquiry { mut request, api_key } = body.into_inner();
    if request.company.trim().is_empty() {
        request.company = state.backend.default_company().to_string();
    }
    let api_key = api_key.and_then(non_blank);

    match process(state.backend.as_ref(), request, api_key.as_deref()).await {
        Outcome::Report(report) => HttpResponse::Ok().json(report),
        Outcome::Refused(message) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message }))
        }
        Outcome::Setup(e) => {
            HttpResponse::ServiceUnavailable().json(serde_json::json!({ "error": e.0 }))
        }
        Outcome::Failed(message) => HttpResponse::BadGateway().json(serde_json::json!({
            "error": format!("Error processing inquiry: {}", message)
        })),
    }
}

async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": VERSION
    }))
}

async fn list_companies(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "companies": CompanySelection::options(),
        "default": state.backend.default_company(),
    }))
}

async fn get_status(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.backend.status())
}
