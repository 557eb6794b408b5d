use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

const RIPPLE_MILLIS: i32 = 600;

pub fn ripple_geometry(
    rect_left: f64,
    rect_top: f64,
    client_x: f64,
    client_y: f64,
    width: f64,
    height: f64,
) -> (f64, f64, f64) {
    let diameter = width.max(height);
    let radius = diameter / 2.0;
    (
        diameter,
        client_x - rect_left - radius,
        client_y - rect_top - radius,
    )
}

pub fn ripple_from_click(event: &web_sys::MouseEvent) -> Result<(), String> {
    let target = event.target().ok_or("Click target missing")?;
    let target = target
        .dyn_into::<web_sys::Element>()
        .map_err(|_| "Click target is not an element")?;
    let button = target
        .closest(".btn")
        .map_err(|_| "Button lookup failed")?
        .ok_or("Click landed outside a button")?;

    let rect = button.get_bounding_client_rect();
    let (diameter, x, y) = ripple_geometry(
        rect.left(),
        rect.top(),
        event.client_x() as f64,
        event.client_y() as f64,
        button.client_width() as f64,
        button.client_height() as f64,
    );

    if let Ok(Some(previous)) = button.query_selector(".ripple-effect") {
        previous.remove();
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("Document unavailable")?;
    let circle = document
        .create_element("span")
        .map_err(|_| "Ripple creation failed")?;
    circle
        .set_attribute("class", "ripple-effect")
        .map_err(|_| "Ripple class failed")?;
    circle
        .set_attribute(
            "style",
            &format!("width: {diameter}px; height: {diameter}px; left: {x}px; top: {y}px;"),
        )
        .map_err(|_| "Ripple style failed")?;
    button
        .append_child(&circle)
        .map_err(|_| "Ripple append failed")?;

    let removable = circle;
    let cleanup = Closure::once(move || {
        removable.remove();
    });
    let window = web_sys::window().ok_or("Window unavailable")?;
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cleanup.as_ref().unchecked_ref(),
        RIPPLE_MILLIS,
    );
    cleanup.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_spans_the_longer_edge() {
        let (diameter, _, _) = ripple_geometry(0.0, 0.0, 10.0, 10.0, 200.0, 48.0);
        assert_eq!(diameter, 200.0);
        let (diameter, _, _) = ripple_geometry(0.0, 0.0, 10.0, 10.0, 40.0, 90.0);
        assert_eq!(diameter, 90.0);
    }

    #[test]
    fn ripple_centers_on_the_click_point() {
        // button at (100, 50), 200x48, clicked dead center
        let (diameter, x, y) = ripple_geometry(100.0, 50.0, 200.0, 74.0, 200.0, 48.0);
        assert_eq!(diameter, 200.0);
        assert_eq!(x, 0.0);
        assert_eq!(y, -76.0);
    }

    #[test]
    fn corner_clicks_overhang_the_button() {
        let (_, x, y) = ripple_geometry(0.0, 0.0, 0.0, 0.0, 120.0, 40.0);
        assert_eq!(x, -60.0);
        assert_eq!(y, -60.0);
    }
}
