//! Mouse pointer handling

/// Translate a mouse event's `clientY` into surface-local coordinates.
///
/// `rect_top` and `rect_height` come from the canvas bounding rect (CSS
/// pixels). When the canvas is displayed at its native size the result is
/// simply `client_y - rect_top`; a stretched canvas is scaled back to surface
/// units. The result is unclamped; the session clamps the paddle.
pub fn pointer_surface_y(
    client_y: f64,
    rect_top: f64,
    rect_height: f64,
    surface_height: f32,
) -> f32 {
    let local = client_y - rect_top;
    if rect_height > 0.0 {
        (local * surface_height as f64 / rect_height) as f32
    } else {
        local as f32
    }
}
