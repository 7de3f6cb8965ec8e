use serde::Serialize;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::config::config;
use crate::models::{self, VehicleRecord};
use crate::store::{Fleet, SharedFleet};

const HOME_TEMPLATE: &str = include_str!("home.html");
const BOOTSTRAP_TOKEN: &str = "__FLEET_BOOTSTRAP__";

pub async fn run(address: std::net::SocketAddr) {
    let fleet = Fleet::new(models::fixture());

    let api = routes(fleet)
        .recover(rejection)
        .with(warp::compression::gzip());

    log::info!("Server listening on {}", address);
    warp::serve(api).run(address).await
}

/// The dashboard surface: rendered home page, the two dataset endpoints,
/// a health probe and the static asset tree.
pub fn routes(
    fleet: SharedFleet,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let home_route = warp::path::end()
        .and(warp::get())
        .and(with_fleet(fleet.clone()))
        .and_then(home);

    let get_data_route = warp::path!("getData")
        .and(warp::get())
        .and(with_fleet(fleet.clone()))
        .and_then(get_data);

    let update_data_route = warp::path!("updateData")
        .and(warp::post())
        .and(warp::body::content_length_limit(1024 * 1024))
        .and(warp::body::json())
        .and(with_fleet(fleet))
        .and_then(update_data);

    let health_route = warp::path!("health").and_then(health);

    let assets_route = warp::fs::dir(config().public_dir.clone());

    home_route
        .or(get_data_route)
        .or(update_data_route)
        .or(health_route)
        .or(assets_route)
}

fn with_fleet(fleet: SharedFleet) -> impl Filter<Extract = (SharedFleet,), Error = Infallible> + Clone {
    warp::any().map(move || fleet.clone())
}

/// GET / - the dashboard page with the current dataset embedded.
pub async fn home(fleet: SharedFleet) -> Result<impl Reply, Rejection> {
    let bootstrap = serde_json::to_string(&fleet.snapshot())
        .map_err(|e| warp::reject::custom(Error(e.into())))?;
    Ok(warp::reply::html(
        HOME_TEMPLATE.replace(BOOTSTRAP_TOKEN, &bootstrap),
    ))
}

/// GET /getData - the current dataset as a JSON array.
pub async fn get_data(fleet: SharedFleet) -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&fleet.snapshot()))
}

/// POST /updateData - wholesale replacement of the dataset.
pub async fn update_data(
    records: Vec<VehicleRecord>,
    fleet: SharedFleet,
) -> Result<impl Reply, Rejection> {
    let count = fleet.replace(records);
    log::info!("Dataset replaced: {} records", count);
    Ok(warp::reply::json(&UpdateMessage {
        message: "Data updated",
    }))
}

pub async fn health() -> Result<impl Reply, Rejection> {
    Ok(StatusCode::OK)
}

#[derive(Serialize)]
struct UpdateMessage {
    message: &'static str,
}

#[derive(Debug)]
struct Error(anyhow::Error);
impl warp::reject::Reject for Error {}

#[derive(Serialize)]
struct ErrorMessage {
    code: u16,
    message: String,
}

pub async fn rejection(err: warp::Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found.")
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        (StatusCode::BAD_REQUEST, "Invalid request body.")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed.")
    } else {
        log::error!("Error: {:?}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
    };

    let json = warp::reply::json(&ErrorMessage {
        code: code.as_u16(),
        message: message.into(),
    });

    Ok(warp::reply::with_status(json, code))
}
