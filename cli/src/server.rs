pub mod http {
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        response::{IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use pacecalc::samples::{samples, SAMPLE_EXPRESSIONS};
    use pacecalc::{tokenize, Calculation, Kind, PlainCalculation, RenderPart, UnitSystem};
    use serde::{Deserialize, Serialize};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower_http::cors::CorsLayer;
    use tracing::{info, warn};

    #[derive(Debug)]
    struct ServerState {
        units: UnitSystem,
    }

    type SharedState = Arc<ServerState>;

    #[derive(Debug, Deserialize)]
    struct TokenizeRequest {
        input: String,
        #[serde(default)]
        units: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    struct UnitsQuery {
        #[serde(default)]
        units: Option<String>,
    }

    #[derive(Debug, Serialize)]
    struct CalculationResponse {
        input: String,
        units: UnitSystem,
        parts: Vec<PartJson>,
        #[serde(skip_serializing_if = "Option::is_none")]
        result: Option<String>,
        ok: bool,
        error: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        plain: PlainCalculation,
    }

    #[derive(Debug, Serialize)]
    struct PartJson {
        kind: Kind,
        text: String,
        pieces: Vec<RenderPart>,
    }

    #[derive(Debug, Serialize)]
    struct ErrorResponse {
        error: String,
    }

    type ApiError = (StatusCode, Json<ErrorResponse>);

    pub fn router(units: UnitSystem) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/tokenize", post(tokenize_post))
            .route("/samples", get(samples_get))
            .layer(CorsLayer::permissive())
            .with_state(Arc::new(ServerState { units }))
    }

    pub async fn start_server(units: UnitSystem, host: &str, port: u16) -> anyhow::Result<()> {
        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("Pacecalc server listening on {} ({} units)", addr, units);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router(units)).await?;

        Ok(())
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "pacecalc",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    async fn tokenize_post(
        State(state): State<SharedState>,
        Json(payload): Json<TokenizeRequest>,
    ) -> Result<impl IntoResponse, ApiError> {
        let units = resolve_units(payload.units.as_deref(), state.units)?;
        let calculation = tokenize(&payload.input, units);

        info!(
            input = %payload.input,
            ok = calculation.is_ok(),
            "tokenized expression"
        );

        Ok(Json(calculation_response(payload.input, &calculation, units)))
    }

    async fn samples_get(
        State(state): State<SharedState>,
        Query(query): Query<UnitsQuery>,
    ) -> Result<impl IntoResponse, ApiError> {
        let units = resolve_units(query.units.as_deref(), state.units)?;
        let responses: Vec<CalculationResponse> = SAMPLE_EXPRESSIONS
            .iter()
            .zip(samples(units))
            .map(|(expression, calculation)| {
                calculation_response(expression.to_string(), &calculation, units)
            })
            .collect();

        Ok(Json(responses))
    }

    fn resolve_units(requested: Option<&str>, fallback: UnitSystem) -> Result<UnitSystem, ApiError> {
        match requested {
            None => Ok(fallback),
            Some(name) => name.parse().map_err(|e: pacecalc::PaceError| {
                warn!("Rejected request: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: e.to_string(),
                    }),
                )
            }),
        }
    }

    fn calculation_response(
        input: String,
        calculation: &Calculation,
        units: UnitSystem,
    ) -> CalculationResponse {
        CalculationResponse {
            input,
            units,
            parts: calculation
                .parts()
                .iter()
                .map(|part| PartJson {
                    kind: part.kind(),
                    text: part.render(units),
                    pieces: part.render_parts(units),
                })
                .collect(),
            result: calculation.result().map(|result| result.render(units)),
            ok: calculation.is_ok(),
            error: calculation.is_error(),
            message: calculation.error_message().map(str::to_string),
            plain: calculation.to_plain(),
        }
    }

}
