use crate::aggregate::dashboard_model;
use crate::errors::AppError;
use crate::fetcher::{fetch_view, load_sales};
use crate::models::{DashboardModel, LoginForm, PeriodQuery, SessionRequest, SessionResponse};
use crate::period::Period;
use crate::sections;
use crate::state::AppState;
use crate::ui::{render_auth, render_landing, render_sales, render_section, SalesLayout};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::Local;

pub async fn index(State(state): State<AppState>) -> Response {
    if state.session.is_authenticated().await {
        return Redirect::to("/dashboard").into_response();
    }
    Html(render_landing()).into_response()
}

pub async fn auth_page(State(state): State<AppState>) -> Html<String> {
    let notices = state.notices.drain().await;
    Html(render_auth(&notices))
}

pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    let email = form.email.trim();
    if email.is_empty() {
        return Err(AppError::bad_request("email is required"));
    }

    // Credentials are accepted as-is; the token only marks the session.
    let token = uuid::Uuid::new_v4().to_string();
    state.session.login(&token).await?;
    Ok(Redirect::to("/dashboard"))
}

pub async fn logout(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.session.logout().await?;
    Ok(Redirect::to("/auth"))
}

pub async fn dashboard(State(state): State<AppState>, Query(query): Query<PeriodQuery>) -> Response {
    sales_page(&state, &query, SalesLayout::Overview).await
}

pub async fn sales_overview(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Response {
    sales_page(&state, &query, SalesLayout::Detailed).await
}

pub async fn section(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    if !state.session.is_authenticated().await {
        return Redirect::to("/auth").into_response();
    }
    let Some(section) = sections::find(&slug) else {
        return (StatusCode::NOT_FOUND, "unknown dashboard section").into_response();
    };
    let notices = state.notices.drain().await;
    Html(render_section(section, &notices)).into_response()
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: state.session.is_authenticated().await,
    })
}

pub async fn create_session(
    State(state): State<AppState>,
    Json(payload): Json<SessionRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let token = payload.token.trim();
    if token.is_empty() {
        return Err(AppError::bad_request("token must not be empty"));
    }
    state.session.login(token).await?;
    Ok(Json(SessionResponse { authenticated: true }))
}

pub async fn delete_session(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.session.logout().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_sales(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<DashboardModel>, AppError> {
    if !state.session.is_authenticated().await {
        return Err(AppError::unauthorized());
    }
    // JSON callers read `failed`; toasts are only for rendered pages.
    let period = Period::from_query(query.period.as_deref());
    let view = fetch_view(state.sales.as_ref()).await;
    Ok(Json(dashboard_model(period, &view, Local::now())))
}

async fn sales_page(state: &AppState, query: &PeriodQuery, layout: SalesLayout) -> Response {
    // Unauthenticated visitors never trigger a fetch.
    if !state.session.is_authenticated().await {
        return Redirect::to("/auth").into_response();
    }
    let period = Period::from_query(query.period.as_deref());
    let view = load_sales(state.sales.as_ref(), &state.notices).await;
    let model = dashboard_model(period, &view, Local::now());
    let notices = state.notices.drain().await;
    Html(render_sales(&model, layout, &notices)).into_response()
}
