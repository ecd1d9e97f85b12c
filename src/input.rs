use orbit_core::PointerInput;
use web_sys as web;

// PointerEvent -> core input, in client coordinates (same space as the
// stage's bounding rect).

#[inline]
pub fn down(ev: &web::PointerEvent) -> PointerInput {
    PointerInput::Down {
        pointer_id: ev.pointer_id(),
        x: ev.client_x() as f64,
        y: ev.client_y() as f64,
    }
}

#[inline]
pub fn moved(ev: &web::PointerEvent) -> PointerInput {
    PointerInput::Move {
        pointer_id: ev.pointer_id(),
        x: ev.client_x() as f64,
        y: ev.client_y() as f64,
    }
}

#[inline]
pub fn up(ev: &web::PointerEvent) -> PointerInput {
    PointerInput::Up {
        pointer_id: ev.pointer_id(),
    }
}

#[inline]
pub fn cancel(ev: &web::PointerEvent) -> PointerInput {
    PointerInput::Cancel {
        pointer_id: ev.pointer_id(),
    }
}
