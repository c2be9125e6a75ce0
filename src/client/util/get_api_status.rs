use crate::model::api::HealthDto;

/// Ask the server whether the API is up
pub async fn get_api_status() -> Result<HealthDto, String> {
    use reqwasm::http::Request;

    let response = Request::get("/api/health")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<HealthDto>()
            .await
            .map_err(|e| format!("Failed to parse health response: {}", e)),
        status => Err(format!("Request failed with status {}", status)),
    }
}
