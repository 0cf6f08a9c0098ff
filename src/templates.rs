use actix_web::HttpResponse;
use askama::Template;

pub fn render<T: Template>(template: T) -> HttpResponse {
    match template.render() {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(err) => {
            log::error!("Failed to render template: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
