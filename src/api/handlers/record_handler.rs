//! CRUD screens shared by every reference-record kind.
//!
//! Each kind gets the same six routes under its base path:
//! `list`, `add`, `validate`, `update/:id` (GET and POST) and `delete/:id`.
//! Successful mutations redirect to the list; rejected forms come back
//! as a 422 form view carrying the submitted values.

use axum::{
    extract::{Extension, Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::api::extractors::BoundForm;
use crate::api::middleware::guard;
use crate::api::AppState;
use crate::domain::{
    BidList, CurvePoint, DomainRecord, Principal, Rating, Requirement, Role, RuleName, Trade,
};
use crate::errors::{AppError, AppResult};
use crate::services::RecordService;
use crate::types::{FormView, View};

/// Route and view names for one screen family.
#[derive(Debug, Clone, Copy)]
pub struct ScreenPaths {
    pub list: &'static str,
    pub add: &'static str,
    pub validate: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
    pub list_view: &'static str,
    pub add_view: &'static str,
    pub update_view: &'static str,
}

/// Build the `ScreenPaths` for a base segment such as `"bidList"`.
macro_rules! screen_paths {
    ($base:literal) => {
        $crate::api::handlers::record_handler::ScreenPaths {
            list: concat!("/", $base, "/list"),
            add: concat!("/", $base, "/add"),
            validate: concat!("/", $base, "/validate"),
            update: concat!("/", $base, "/update/:id"),
            delete: concat!("/", $base, "/delete/:id"),
            list_view: concat!($base, "/list"),
            add_view: concat!($base, "/add"),
            update_view: concat!($base, "/update"),
        }
    };
}
pub(crate) use screen_paths;

/// Binds a record kind to its screens and its service.
pub trait RecordRoute: DomainRecord + Serialize + DeserializeOwned {
    const PATHS: ScreenPaths;
    const REQUIREMENT: Requirement;

    fn service(state: &AppState) -> &Arc<dyn RecordService<Self>>;
}

impl RecordRoute for BidList {
    const PATHS: ScreenPaths = screen_paths!("bidList");
    const REQUIREMENT: Requirement = Requirement::Role(Role::Admin);

    fn service(state: &AppState) -> &Arc<dyn RecordService<Self>> {
        &state.services.bid_lists
    }
}

impl RecordRoute for CurvePoint {
    const PATHS: ScreenPaths = screen_paths!("curvePoint");
    const REQUIREMENT: Requirement = Requirement::Role(Role::Admin);

    fn service(state: &AppState) -> &Arc<dyn RecordService<Self>> {
        &state.services.curve_points
    }
}

impl RecordRoute for Rating {
    const PATHS: ScreenPaths = screen_paths!("rating");
    const REQUIREMENT: Requirement = Requirement::Role(Role::Admin);

    fn service(state: &AppState) -> &Arc<dyn RecordService<Self>> {
        &state.services.ratings
    }
}

impl RecordRoute for RuleName {
    const PATHS: ScreenPaths = screen_paths!("ruleName");
    const REQUIREMENT: Requirement = Requirement::Authenticated;

    fn service(state: &AppState) -> &Arc<dyn RecordService<Self>> {
        &state.services.rule_names
    }
}

impl RecordRoute for Trade {
    const PATHS: ScreenPaths = screen_paths!("trade");
    const REQUIREMENT: Requirement = Requirement::Authenticated;

    fn service(state: &AppState) -> &Arc<dyn RecordService<Self>> {
        &state.services.trades
    }
}

/// List screen model
#[derive(Serialize)]
pub struct ListModel<T: Serialize> {
    #[serde(rename = "remoteUser", skip_serializing_if = "Option::is_none")]
    pub remote_user: Option<String>,
    pub records: Vec<T>,
}

/// Routes for every reference-record kind, each behind its own gate
pub fn record_routes() -> Router<AppState> {
    Router::new()
        .merge(screens::<BidList>())
        .merge(screens::<CurvePoint>())
        .merge(screens::<Rating>())
        .merge(screens::<RuleName>())
        .merge(screens::<Trade>())
}

/// The six screens for kind `R`
pub fn screens<R: RecordRoute>() -> Router<AppState> {
    let paths = R::PATHS;
    let router = Router::new()
        .route(paths.list, get(list::<R>))
        .route(paths.add, get(add_form::<R>))
        .route(paths.validate, post(validate::<R>))
        .route(paths.update, get(update_form::<R>).post(update::<R>))
        .route(paths.delete, get(delete::<R>));

    guard(router, R::REQUIREMENT)
}

/// Redirect to `target` on success; re-show the form on a rejection.
pub(crate) fn settle<T, F: Serialize>(
    result: AppResult<T>,
    view: &'static str,
    form: F,
    target: &'static str,
) -> AppResult<Response> {
    match result {
        Ok(_) => Ok(Redirect::to(target).into_response()),
        Err(AppError::Validation(message)) => {
            Ok(FormView::rejected(view, form, vec![message]).into_response())
        }
        Err(e) => Err(e),
    }
}

async fn list<R: RecordRoute>(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
) -> AppResult<View<ListModel<R>>> {
    let records = R::service(&state).list_all().await?;

    Ok(View::new(
        R::PATHS.list_view,
        ListModel {
            remote_user: principal.map(|Extension(p)| p.username),
            records,
        },
    ))
}

async fn add_form<R: RecordRoute>() -> FormView<R> {
    FormView::new(R::PATHS.add_view, R::default())
}

async fn validate<R: RecordRoute>(
    State(state): State<AppState>,
    submission: BoundForm<R>,
) -> AppResult<Response> {
    let form = match submission.into_form(R::PATHS.add_view) {
        Ok(form) => form,
        Err(reshown) => return Ok(reshown),
    };
    let result = R::service(&state).add(form.clone()).await;
    settle(result, R::PATHS.add_view, form, R::PATHS.list)
}

async fn update_form<R: RecordRoute>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<FormView<R>> {
    let record = R::service(&state).find_by_id_or_fail(id).await?;
    Ok(FormView::new(R::PATHS.update_view, record))
}

async fn update<R: RecordRoute>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    submission: BoundForm<R>,
) -> AppResult<Response> {
    let form = match submission.into_form(R::PATHS.update_view) {
        Ok(form) => form,
        Err(reshown) => return Ok(reshown),
    };
    let result = R::service(&state).update(id, form.clone()).await;
    settle(result, R::PATHS.update_view, form, R::PATHS.list)
}

async fn delete<R: RecordRoute>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    R::service(&state).delete(id).await?;
    Ok(Redirect::to(R::PATHS.list))
}
