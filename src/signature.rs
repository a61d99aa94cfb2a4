//! Signature capture on a 2D canvas.
//!
//! Drawing is immediate mode: each pointer move strokes one segment right away,
//! nothing is retained besides the canvas pixels. Lifting the pointer snapshots
//! the canvas as a data URL.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: &'static str,
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

pub const SIGNATURE_STROKE: StrokeStyle = StrokeStyle {
    color: "#222",
    width: 2.0,
    cap: LineCap::Round,
    join: LineJoin::Round,
};

/// The drawing surface, typically a `CanvasRenderingContext2d` plus its element.
pub trait Canvas {
    fn begin_path(&mut self, at: Point);

    fn line_to(&mut self, to: Point);

    fn stroke(&mut self, style: &StrokeStyle);

    fn close_path(&mut self);

    fn clear(&mut self);

    /// Base64 PNG, `data:image/png;base64,...`.
    fn to_data_url(&self) -> String;
}

/// Positions are viewport (client) coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Mouse { client: Point },
    Touch { touches: Vec<Point> },
}

impl PointerEvent {
    /// Mouse position, or the first touch point.
    fn client(&self) -> Option<Point> {
        match self {
            PointerEvent::Mouse { client } => Some(*client),
            PointerEvent::Touch { touches } => touches.first().copied(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    Default,
    /// Keep the browser from scrolling while the user signs.
    PreventDefault,
}

pub struct SignaturePad<C> {
    canvas: C,
    origin: Point,
    drawing: bool,
}

impl<C: Canvas> SignaturePad<C> {
    pub fn new(canvas: C) -> Self {
        Self {
            canvas,
            origin: Point::default(),
            drawing: false,
        }
    }

    /// Top-left corner of the canvas' bounding rect, in client coordinates.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    fn position(&self, event: &PointerEvent) -> Option<Point> {
        event
            .client()
            .map(|client| Point::new(client.x - self.origin.x, client.y - self.origin.y))
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) {
        if let Some(at) = self.position(event) {
            self.drawing = true;
            self.canvas.begin_path(at);
        }
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) -> EventDisposition {
        if !self.drawing {
            return EventDisposition::Default;
        }

        if let Some(to) = self.position(event) {
            self.canvas.line_to(to);
            self.canvas.stroke(&SIGNATURE_STROKE);
        }

        EventDisposition::PreventDefault
    }

    /// Ends the stroke. Returns the new canvas snapshot when a stroke was in
    /// progress.
    pub fn pointer_up(&mut self) -> Option<String> {
        if !self.drawing {
            return None;
        }

        self.drawing = false;
        self.canvas.close_path();

        Some(self.canvas.to_data_url())
    }

    pub fn pointer_leave(&mut self) -> Option<String> {
        self.pointer_up()
    }

    pub fn clear(&mut self) {
        self.drawing = false;
        self.canvas.clear();
    }
}
