use std::sync::Arc;

use async_trait::async_trait;
use salvo::{http::StatusCode, writer::Json, Depot, FlowCtrl, Handler, Request, Response};

use crate::{
    app::{resource::UserRequest, use_case},
    domain::repository::UserRepository,
    error::http::BadRequest,
};

macro_rules! map_res_err {
    ($result:ident, $response:ident) => {
        match $result {
            Err(err) => {
                $response.render(err);
                return;
            }
            Ok(ok) => ok,
        }
    };
}

/// Extract the numeric user id from the request path.
fn extract_id(req: &Request) -> Result<i64, BadRequest> {
    req.params()
        .get("id")
        .ok_or(BadRequest::InvalidPath)?
        .parse()
        .map_err(|_| BadRequest::InvalidPath)
}

pub struct CreateUserController {
    repository: Arc<dyn UserRepository>,
}

impl CreateUserController {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Handler for CreateUserController {
    async fn handle(&self, req: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        let result: Result<UserRequest, _> = req.parse_body().await.map_err(BadRequest::from);
        let request = map_res_err!(result, res);

        let result = use_case::create_user(self.repository.as_ref(), request).await;
        let user = map_res_err!(result, res);

        res.render(Json(user));
        res.set_status_code(StatusCode::CREATED);
    }
}

pub struct GetUserController {
    repository: Arc<dyn UserRepository>,
}

impl GetUserController {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Handler for GetUserController {
    async fn handle(&self, req: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        let result = extract_id(req);
        let id = map_res_err!(result, res);

        let result = use_case::get_user_by_id(self.repository.as_ref(), id).await;
        let user = map_res_err!(result, res);

        res.render(Json(user));
        res.set_status_code(StatusCode::OK);
    }
}

pub struct ListUsersController {
    repository: Arc<dyn UserRepository>,
}

impl ListUsersController {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Handler for ListUsersController {
    async fn handle(&self, _: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        let result = use_case::get_all_users(self.repository.as_ref()).await;
        let users = map_res_err!(result, res);

        res.render(Json(users));
        res.set_status_code(StatusCode::OK);
    }
}

pub struct UpdateUserController {
    repository: Arc<dyn UserRepository>,
}

impl UpdateUserController {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Handler for UpdateUserController {
    async fn handle(&self, req: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        let result = extract_id(req);
        let id = map_res_err!(result, res);

        let result: Result<UserRequest, _> = req.parse_body().await.map_err(BadRequest::from);
        let request = map_res_err!(result, res);

        let result = use_case::update_user(self.repository.as_ref(), id, request).await;
        let user = map_res_err!(result, res);

        res.render(Json(user));
        res.set_status_code(StatusCode::OK);
    }
}

pub struct DeleteUserController {
    repository: Arc<dyn UserRepository>,
}

impl DeleteUserController {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Handler for DeleteUserController {
    async fn handle(&self, req: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        let result = extract_id(req);
        let id = map_res_err!(result, res);

        let result = use_case::delete_user(self.repository.as_ref(), id).await;
        map_res_err!(result, res);

        res.set_status_code(StatusCode::NO_CONTENT);
    }
}
