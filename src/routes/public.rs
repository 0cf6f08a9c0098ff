use actix_web::{web, HttpResponse, Result};
use askama::Template;

use crate::templates::render;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home)))
        .service(web::resource("/health").route(web::get().to(health)));
}

async fn home() -> Result<HttpResponse> {
    Ok(render(HomeTemplate))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_template_renders_fixed_copy() {
        let html = HomeTemplate.render().unwrap();
        assert!(html.contains("BarberShop"));
        assert!(html.contains("Bem-vindo ao nosso sistema de agendamentos"));
    }
}
