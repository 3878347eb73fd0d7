use actix_cors::Cors;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use rs_token_core::token::charset::CharacterClass;
use rs_token_core::token::error::GenerateError;
use rs_token_core::token::generator;
use rs_token_core::token::request::TokenRequest;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	length: Option<usize>,
	class: Option<String>,
	extra: Option<String>,
}

impl GenerateParams {
	/// Builds a `TokenRequest` from the query parameters.
	///
	/// The length is required; there is no server-side default. Unknown
	/// class tags are accepted and resolve to the default class.
	fn request(&self) -> Result<TokenRequest, String> {
		let length = match self.length {
			Some(length) => length,
			None => return Err("Missing length".to_owned()),
		};

		let mut request = TokenRequest::new(length);
		if let Some(class) = &self.class {
			request.character_class = CharacterClass::from_tag(class);
		}
		if let Some(extra) = &self.extra {
			request.extra_characters = extra.clone();
		}
		Ok(request)
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates a token from the query parameters and returns it as the
/// response body.
#[get("/v1/generate")]
async fn get_generated(query: web::Query<GenerateParams>) -> impl Responder {
	let request = match query.request() {
		Ok(r) => r,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	match generator::generate(&request) {
		Ok(token) => HttpResponse::Ok().body(token),
		Err(e @ GenerateError::InvalidArgument(_)) => HttpResponse::BadRequest().body(e.to_string()),
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/classes`
///
/// Lists the known character-class tags, one per line.
#[get("/v1/classes")]
async fn get_classes() -> impl Responder {
	let tags: Vec<&str> = CharacterClass::ALL.iter().map(|class| class.tag()).collect();
	HttpResponse::Ok().body(tags.join("\n"))
}

/// Main entry point for the server.
///
/// Starts an Actix-web HTTP server exposing the token generator. The
/// generator is stateless, so handlers share nothing.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - CORS is permissive so that a page served elsewhere can request tokens.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	HttpServer::new(|| {
		App::new()
			.wrap(Cors::permissive())
			.wrap(middleware::Logger::default())
			.service(get_generated)
			.service(get_classes)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
