/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// Renders only when a value actually changed.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.is_connected, true)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.is_connected, true;
///     model.refresh_busy, false
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for GET requests expecting a JSON response.
/// Requires domain parameters for event wrapping.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The shell strips this prefix before sending requests.
///
/// # Example
/// ```ignore
/// api_get!(Status, StatusEvent, "/api/status", FetchResponse, "Fetch status", StatusPayload)
/// ```
#[macro_export]
macro_rules! api_get {
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $action:expr, $response_type:ty) => {
        $crate::HttpCmd::get($crate::http_helpers::build_url($endpoint))
            .build()
            .then_send(|result| {
                let event_result: Result<$response_type, $crate::error::ClientError> =
                    $crate::http_helpers::process_json_response($action, result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            })
    };
}

/// Macro for POST requests answered with a `{success, message}` reply.
/// Requires domain parameters for event wrapping.
///
/// The response event always fires exactly once, also when the request could
/// not be built, so handlers can restore busy controls in one place.
///
/// # Patterns
///
/// Pattern 1: Simple POST without body
/// ```ignore
/// api_post!(Status, StatusEvent, "/api/refresh", RefreshResponse, "Refresh")
/// ```
///
/// Pattern 2: POST with JSON body
/// ```ignore
/// api_post!(Control, ControlEvent, "/api/control", SubmitResponse, "Control",
///     body_json: &request
/// )
/// ```
#[macro_export]
macro_rules! api_post {
    // Pattern 1: Simple POST without body
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $action:expr) => {{
        crux_core::Command::all([
            crux_core::render::render(),
            $crate::HttpCmd::post($crate::http_helpers::build_url($endpoint))
                .header("Content-Type", "application/json")
                .build()
                .then_send(|result| {
                    let event_result = $crate::http_helpers::process_reply($action, result);
                    $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                        event_result,
                    ))
                }),
        ])
    }};

    // Pattern 2: POST with JSON body
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $action:expr, body_json: $body:expr) => {{
        match $crate::HttpCmd::post($crate::http_helpers::build_url($endpoint))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => crux_core::Command::all([
                crux_core::render::render(),
                builder.build().then_send(|result| {
                    let event_result = $crate::http_helpers::process_reply($action, result);
                    $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                        event_result,
                    ))
                }),
            ]),
            Err(e) => {
                log::error!("Failed to create {} request: {e}", $action);
                crux_core::Command::event($crate::events::Event::$domain(
                    $crate::events::$domain_event::$response_event(Err(
                        $crate::error::ClientError::transport($action, e),
                    )),
                ))
            }
        }
    }};
}
