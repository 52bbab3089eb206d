//! HTTP handler functions for the taxi dashboard API.

use actix_web::{HttpResponse, web};
use reunion_taxi_analytics::{AnalyticsError, aggregate, query, scenarios};
use reunion_taxi_analytics_models::{
    CommuneFilter, CommuneMetric, GroupKey, HistoryFilter, HistoryMetric, SimulatorParams,
};
use reunion_taxi_dataset::profiles;
use reunion_taxi_models::MicroRegion;
use reunion_taxi_server_models::{
    ApiDriverProfile, ApiError, ApiHealth, ApiRegion, CommuneQueryParams, HistoryQueryParams,
    SimulateQueryParams, TopQueryParams, parse_filter, parse_filter_list,
};

use crate::AppState;

const DEFAULT_TOP_N: usize = 10;

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiError::new(message))
}

fn analytics_error(e: &AnalyticsError) -> HttpResponse {
    match e {
        AnalyticsError::UnknownCommune { .. } | AnalyticsError::UnknownRegion { .. } => {
            HttpResponse::NotFound().json(ApiError::new(e.to_string()))
        }
        AnalyticsError::InvalidParameter { .. } => {
            HttpResponse::BadRequest().json(ApiError::new(e.to_string()))
        }
        AnalyticsError::Dataset(_) => {
            log::error!("Dashboard query failed: {e}");
            HttpResponse::InternalServerError().json(ApiError::new("Dashboard query failed"))
        }
    }
}

/// `GET /api/health`
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let dashboard = &state.dashboard;
    let (history_start_year, history_end_year) = dashboard.year_range();

    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        communes: dashboard.communes().len(),
        seed: dashboard.seed(),
        history_start_year,
        history_end_year,
    })
}

/// `GET /api/communes`
///
/// Commune comparison table, filtered by micro-region and activity level
/// and sorted descending on `sortBy`.
pub async fn communes(
    state: web::Data<AppState>,
    params: web::Query<CommuneQueryParams>,
) -> HttpResponse {
    let filter = match commune_filter(&params) {
        Ok(filter) => filter,
        Err(message) => return bad_request(message),
    };

    HttpResponse::Ok().json(query::filter_communes(state.dashboard.communes(), &filter))
}

fn commune_filter(params: &CommuneQueryParams) -> Result<CommuneFilter, String> {
    Ok(CommuneFilter {
        micro_region: parse_filter("microRegion", params.micro_region.as_deref())?,
        activity_level: parse_filter("activityLevel", params.activity_level.as_deref())?,
        sort_key: parse_filter("sortBy", params.sort_by.as_deref())?.unwrap_or_default(),
    })
}

/// `GET /api/communes/{name}`
pub async fn commune(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    match state.dashboard.commune_detail(&path) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => analytics_error(&e),
    }
}

/// `GET /api/stations`
pub async fn stations(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.dashboard.stations())
}

/// `GET /api/regions`
pub async fn regions(state: web::Data<AppState>) -> HttpResponse {
    let regions: Vec<ApiRegion> = state
        .dashboard
        .regions()
        .values()
        .map(ApiRegion::from)
        .collect();

    HttpResponse::Ok().json(regions)
}

/// `GET /api/regions/{region}`
pub async fn region(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let Ok(region) = path.trim().parse::<MicroRegion>() else {
        return HttpResponse::NotFound().json(ApiError::new(format!(
            "Unknown micro-region: {}",
            path.as_str()
        )));
    };

    match state.dashboard.region_detail(region) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => analytics_error(&e),
    }
}

/// `GET /api/history`
///
/// Without `groupBy`, returns the matching history points. With it,
/// returns per-year totals of `metric`.
pub async fn history(
    state: web::Data<AppState>,
    params: web::Query<HistoryQueryParams>,
) -> HttpResponse {
    let (filter, group_by, metric) = match history_query(&params) {
        Ok(parsed) => parsed,
        Err(message) => return bad_request(message),
    };
    let points = query::filter_history(state.dashboard.history(), &filter);

    match group_by {
        Some(group_key) => {
            HttpResponse::Ok().json(aggregate::summarize_by_year(points, group_key, metric))
        }
        None => HttpResponse::Ok().json(points),
    }
}

fn history_query(
    params: &HistoryQueryParams,
) -> Result<(HistoryFilter, Option<GroupKey>, HistoryMetric), String> {
    let filter = HistoryFilter {
        from_year: params.from_year,
        to_year: params.to_year,
        micro_regions: parse_filter_list("regions", params.regions.as_deref())?,
        commune: params.commune.clone().filter(|c| !c.trim().is_empty()),
    };
    let group_by = parse_filter("groupBy", params.group_by.as_deref())?;
    let metric = parse_filter("metric", params.metric.as_deref())?.unwrap_or_default();

    Ok((filter, group_by, metric))
}

/// `GET /api/top`
pub async fn top(state: web::Data<AppState>, params: web::Query<TopQueryParams>) -> HttpResponse {
    let metric: CommuneMetric = match parse_filter("field", params.field.as_deref()) {
        Ok(metric) => metric.unwrap_or_default(),
        Err(message) => return bad_request(message),
    };
    let n = params.n.unwrap_or(DEFAULT_TOP_N);

    HttpResponse::Ok().json(query::top_n(state.dashboard.communes(), metric, n))
}

/// `GET /api/metrics`
pub async fn metrics(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.dashboard.key_metrics())
}

/// `GET /api/density`
pub async fn density(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(aggregate::density_table(state.dashboard.communes()))
}

/// `GET /api/scenarios`
pub async fn scenarios() -> HttpResponse {
    HttpResponse::Ok().json(scenarios::scenarios_2030())
}

/// `GET /api/simulate`
pub async fn simulate(
    state: web::Data<AppState>,
    params: web::Query<SimulateQueryParams>,
) -> HttpResponse {
    let priority_region = match parse_filter("priorityRegion", params.priority_region.as_deref())
    {
        Ok(region) => region,
        Err(message) => return bad_request(message),
    };

    let defaults = SimulatorParams::default();
    let sliders = SimulatorParams {
        tourism_growth: params.tourism_growth.unwrap_or(defaults.tourism_growth),
        digitalisation: params.digitalisation.unwrap_or(defaults.digitalisation),
        training_investment: params
            .training_investment
            .unwrap_or(defaults.training_investment),
        new_stations: params.new_stations.unwrap_or(defaults.new_stations),
        renewal_aid: params.renewal_aid.unwrap_or(defaults.renewal_aid),
        priority_region,
    };

    match scenarios::simulate(state.dashboard.communes(), &sliders) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => analytics_error(&e),
    }
}

/// `GET /api/drivers`
pub async fn drivers() -> HttpResponse {
    let profiles: Vec<ApiDriverProfile> = profiles::driver_profiles()
        .into_iter()
        .map(ApiDriverProfile::from)
        .collect();

    HttpResponse::Ok().json(profiles)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use reunion_taxi_analytics::{Dashboard, DashboardConfig};
    use serde_json::Value;

    use crate::{AppState, configure};

    fn state() -> web::Data<AppState> {
        let dashboard = Dashboard::build(&DashboardConfig {
            history_start_year: 2018,
            history_end_year: Some(2024),
            seed: Some(2024),
        })
        .unwrap();
        web::Data::new(AppState {
            dashboard: Arc::new(dashboard),
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    fn names(body: &Value) -> Vec<&str> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect()
    }

    #[actix_web::test]
    async fn health() {
        let (status, body) = get_json("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["healthy"], true);
        assert_eq!(body["communes"], 23);
        assert_eq!(body["seed"], 2024);
    }

    #[actix_web::test]
    async fn communes_filtered_by_region() {
        let (status, body) = get_json("/api/communes?microRegion=west&sortBy=TAXI_COUNT").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body).len(), 7);
        assert_eq!(names(&body)[0], "Saint-Paul");
        assert!(
            body.as_array()
                .unwrap()
                .iter()
                .all(|c| c["microRegion"] == "WEST")
        );
    }

    #[actix_web::test]
    async fn all_sentinel_disables_filter() {
        let (status, body) = get_json("/api/communes?microRegion=All&activityLevel=ALL").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body).len(), 23);
        assert_eq!(names(&body)[0], "Saint-Denis");
    }

    #[actix_web::test]
    async fn invalid_filter_is_bad_request() {
        let (status, body) = get_json("/api/communes?microRegion=atlantis").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid microRegion: atlantis");
    }

    #[actix_web::test]
    async fn commune_detail() {
        let (status, body) = get_json("/api/communes/Saint-Denis").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["commune"]["name"], "Saint-Denis");
        assert_eq!(body["stations"].as_array().unwrap().len(), 3);
        assert_eq!(body["history"].as_array().unwrap().len(), 7);
    }

    #[actix_web::test]
    async fn unknown_commune_is_not_found() {
        let (status, body) = get_json("/api/communes/Paris").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Unknown commune: Paris");
    }

    #[actix_web::test]
    async fn regions() {
        let (status, body) = get_json("/api/regions").await;
        assert_eq!(status, StatusCode::OK);

        let regions = body.as_array().unwrap();
        assert_eq!(regions.len(), 5);
        assert_eq!(regions[0]["microRegion"], "NORTH");
        assert_eq!(regions[0]["label"], "Nord");
        assert_eq!(regions[0]["totalTaxis"], 248);
    }

    #[actix_web::test]
    async fn region_detail() {
        let (status, body) = get_json("/api/regions/cirques").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["totalTaxis"], 11);
        assert_eq!(body["communes"].as_array().unwrap().len(), 2);

        let (status, _) = get_json("/api/regions/atlantis").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn history_points_and_totals() {
        let (status, body) = get_json("/api/history?fromYear=2020&toYear=2021&regions=north").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2 * 3);

        let (status, body) =
            get_json("/api/history?groupBy=MICRO_REGION&metric=demand&regions=all").await;
        assert_eq!(status, StatusCode::OK);
        let totals = body.as_array().unwrap();
        assert_eq!(totals.len(), 7 * 5);
        assert_eq!(totals[0]["year"], 2018);

        let (status, _) = get_json("/api/history?metric=speed").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn top_by_demand() {
        let (status, body) = get_json("/api/top?field=DAILY_DEMAND&n=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body).len(), 3);
        assert_eq!(names(&body)[0], "Saint-Denis");

        let (_, body) = get_json("/api/top").await;
        assert_eq!(names(&body).len(), 10);
    }

    #[actix_web::test]
    async fn metrics_and_density() {
        let (_, body) = get_json("/api/metrics").await;
        assert_eq!(body["totalTaxis"], 911);
        assert_eq!(body["communeCount"], 23);

        let (_, body) = get_json("/api/density").await;
        assert_eq!(body.as_array().unwrap().len(), 23);
    }

    #[actix_web::test]
    async fn scenarios_and_drivers() {
        let (_, body) = get_json("/api/scenarios").await;
        assert_eq!(body.as_array().unwrap().len(), 4);
        assert_eq!(body[0]["kind"], "CONSERVATIVE");

        let (_, body) = get_json("/api/drivers").await;
        assert_eq!(body.as_array().unwrap().len(), 6);
        assert_eq!(body[0]["kind"], "AGE_BAND");
    }

    #[actix_web::test]
    async fn malformed_numbers_are_json_bad_requests() {
        for uri in [
            "/api/top?n=abc",
            "/api/history?fromYear=x",
            "/api/simulate?digitalisation=-5",
        ] {
            let (status, body) = get_json(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(body["error"].is_string(), "{uri}");
        }
    }

    #[actix_web::test]
    async fn simulate() {
        let (status, body) = get_json("/api/simulate").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["currentTaxis"], 911);

        let (status, body) =
            get_json("/api/simulate?tourismGrowth=0&digitalisation=0&newStations=0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["taxisChangePercent"], 0.0);
        assert_eq!(body["demandChangePercent"], 0.0);

        let (status, body) = get_json("/api/simulate?digitalisation=150").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("digitalisation"));
    }
}
