//! Mapping from pointer input to faces of the cube.

use cgmath::{
    Deg, EuclideanSpace, InnerSpace, Matrix4, Point2, Point3, SquareMatrix, Transform, Vector3,
};
use float_ord::FloatOrd;
use spincube_core::{Axis, CUBELET_SIZE, Cube, Face, PieceId, Sign};
use spincube_prefs::InteractionPreferences;

use crate::AnimationStatus;

/// Emissive color added to a hovered piece.
pub const HOVER_EMISSIVE_RGB: u32 = 0x333333;

/// Directions closer to parallel with a slab than this are treated as
/// parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Rectangle on the screen, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    #[allow(missing_docs)]
    pub width: f32,
    #[allow(missing_docs)]
    pub height: f32,
}
impl Viewport {
    /// Constructs a viewport with its top left corner at the origin.
    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }
}

/// Converts a pixel coordinate (with Y pointing down) to normalized device
/// coordinates in the range [-1, 1] (with Y pointing up). Returns `None` if
/// the pointer is outside the viewport or the viewport is empty.
pub fn pointer_to_ndc(pointer: Point2<f32>, viewport: Viewport) -> Option<Point2<f32>> {
    if !(viewport.width > 0.0 && viewport.height > 0.0) {
        return None;
    }
    let u = (pointer.x - viewport.x) / viewport.width;
    let v = (pointer.y - viewport.y) / viewport.height;
    if !((0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v)) {
        return None;
    }
    Some(Point2::new(u * 2.0 - 1.0, 1.0 - v * 2.0))
}

/// Half-line in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Point3<f32>,
    /// Unit vector.
    pub direction: Vector3<f32>,
}

/// Perspective camera.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    /// Position of the camera.
    pub eye: Point3<f32>,
    /// Point that the camera looks at.
    pub target: Point3<f32>,
    /// Direction that appears upward on screen.
    pub up: Vector3<f32>,
    /// Vertical field of view.
    pub fov_y: Deg<f32>,
    /// Width divided by height.
    pub aspect: f32,
    /// Distance to the near clipping plane.
    pub near: f32,
    /// Distance to the far clipping plane.
    pub far: f32,
}
impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Point3::new(6.0, 6.0, 6.0),
            target: Point3::origin(),
            up: Vector3::unit_y(),
            fov_y: Deg(75.0),
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}
impl Camera {
    /// Returns the view matrix.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.eye, self.target, self.up)
    }
    /// Returns the projection matrix.
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        cgmath::perspective(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Returns the ray from the camera through a point in normalized device
    /// coordinates.
    pub fn ray(&self, ndc: Point2<f32>) -> Ray {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward);

        let tan_half_fov = (self.fov_y / 2.0).0.to_radians().tan();
        let direction = forward
            + right * (ndc.x * tan_half_fov * self.aspect)
            + up * (ndc.y * tan_half_fov);

        Ray {
            origin: self.eye,
            direction: direction.normalize(),
        }
    }
}

/// Intersection of a ray with a piece.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickHit {
    /// Piece that was hit.
    pub piece: PieceId,
    /// Distance from the ray origin to the intersection.
    pub distance: f32,
    /// Face of the piece that was hit, in the piece's own frame.
    pub local_face: Face,
    /// Outward normal of the surface that was hit, in world space.
    pub world_normal: Vector3<f32>,
}

/// Returns the nearest piece hit by the ray through `ndc`, where `model` is
/// the model matrix of the whole cube.
pub fn pick(cube: &Cube, camera: &Camera, model: Matrix4<f32>, ndc: Point2<f32>) -> Option<PickHit> {
    let ray = camera.ray(ndc);
    cube.pieces()
        .iter()
        .filter_map(|piece| {
            let transform = model * piece.model_matrix();
            let inv = transform.invert()?;
            let local_origin = inv.transform_point(ray.origin);
            let local_direction = inv.transform_vector(ray.direction);
            let (distance, local_face) =
                intersect_cubelet(local_origin, local_direction, CUBELET_SIZE / 2.0)?;
            let world_normal = transform.transform_vector(local_face.normal()).normalize();
            Some(PickHit {
                piece: piece.id(),
                distance,
                local_face,
                world_normal,
            })
        })
        .min_by_key(|hit| FloatOrd(hit.distance))
}

/// Intersects a ray with an axis-aligned cube of half-width `half` centered
/// at the origin. Returns the ray parameter of the entry point and the face
/// through which the ray enters, or `None` if the ray misses or starts inside
/// the cube.
fn intersect_cubelet(origin: Point3<f32>, direction: Vector3<f32>, half: f32) -> Option<(f32, Face)> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    let mut entry_face = None;

    for axis in Axis::iter() {
        let o = origin[axis.int()];
        let d = direction[axis.int()];
        if d.abs() < PARALLEL_EPSILON {
            if o.abs() > half {
                return None;
            }
            continue;
        }
        let t0 = (-half - o) / d;
        let t1 = (half - o) / d;
        let (near, far, near_sign) = if t0 < t1 {
            (t0, t1, Sign::Neg)
        } else {
            (t1, t0, Sign::Pos)
        };
        if near > t_min {
            t_min = near;
            entry_face = Face::new(axis, near_sign);
        }
        t_max = t_max.min(far);
        if t_min > t_max {
            return None;
        }
    }

    if t_min < 0.0 {
        return None;
    }
    Some((t_min, entry_face?))
}

/// Returns the face that a world-space surface normal points toward, checking
/// Z, then X, then Y. Returns `None` if no component's magnitude exceeds
/// `threshold`.
pub fn classify_normal(normal: Vector3<f32>, threshold: f32) -> Option<Face> {
    [Axis::Z, Axis::X, Axis::Y].into_iter().find_map(|axis| {
        let c = normal[axis.int()];
        if c.abs() > threshold {
            Face::new(axis, if c > 0.0 { Sign::Pos } else { Sign::Neg })
        } else {
            None
        }
    })
}

/// Returns the face under the pointer, or `None` if the pointer is not over
/// the cube, the surface under it is ambiguous, or an animation is in flight.
pub fn face_at(
    cube: &Cube,
    status: &impl AnimationStatus,
    camera: &Camera,
    model: Matrix4<f32>,
    ndc: Point2<f32>,
    threshold: f32,
) -> Option<Face> {
    if status.is_animating() {
        return None;
    }
    let hit = pick(cube, camera, model, ndc)?;
    let face = classify_normal(hit.world_normal, threshold);
    log::trace!("Pointer at {ndc:?} hit piece {} facing {face:?}", hit.piece);
    face
}

/// Pointer event, with positions in normalized device coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    /// Mouse button pressed.
    MouseDown(Point2<f32>),
    /// Mouse button released.
    MouseUp(Point2<f32>),
    /// Mouse moved.
    MouseMove(Point2<f32>),
    /// Touch began; `touches` is the number of touches now active.
    #[allow(missing_docs)]
    TouchStart { touches: usize, pos: Point2<f32> },
    /// Touch moved; `touches` is the number of touches now active.
    #[allow(missing_docs)]
    TouchMove { touches: usize, pos: Point2<f32> },
    /// Touch ended; `touches` is the number of touches still active.
    #[allow(missing_docs)]
    TouchEnd { touches: usize },
}

/// Turns pointer events into face selections and hover state.
///
/// A face is selected when a mouse button is released, or when the last
/// touch ends, after a press that began with a single pointer.
#[derive(Debug, Clone)]
pub struct InteractionController {
    /// Camera used to cast rays through the pointer.
    pub camera: Camera,
    /// Model matrix of the whole cube.
    pub model: Matrix4<f32>,
    #[allow(missing_docs)]
    pub prefs: InteractionPreferences,

    /// Last known pointer position.
    pointer: Point2<f32>,
    is_dragging: bool,
    hovered: Option<PieceId>,
}
impl Default for InteractionController {
    fn default() -> Self {
        Self::new(Camera::default(), InteractionPreferences::default())
    }
}
impl InteractionController {
    /// Constructs a controller for a cube with an identity model matrix.
    pub fn new(camera: Camera, prefs: InteractionPreferences) -> Self {
        Self {
            camera,
            model: Matrix4::identity(),
            prefs,
            pointer: Point2::origin(),
            is_dragging: false,
            hovered: None,
        }
    }

    /// Returns the piece under the pointer, if hover highlighting is enabled.
    pub fn hovered_piece(&self) -> Option<PieceId> {
        self.hovered
    }
    /// Returns the emissive color to draw `piece` with: [`HOVER_EMISSIVE_RGB`]
    /// if it is hovered and black otherwise.
    pub fn emissive_rgb(&self, piece: PieceId) -> u32 {
        if self.hovered == Some(piece) {
            HOVER_EMISSIVE_RGB
        } else {
            0
        }
    }

    /// Handles a pointer event. Returns the face to turn, if any.
    pub fn handle_event(
        &mut self,
        event: PointerEvent,
        cube: &Cube,
        status: &impl AnimationStatus,
    ) -> Option<Face> {
        match event {
            PointerEvent::MouseDown(pos) => {
                self.is_dragging = true;
                self.pointer = pos;
                None
            }
            PointerEvent::MouseUp(pos) => {
                if !self.is_dragging {
                    return None;
                }
                self.pointer = pos;
                self.is_dragging = false;
                self.select_face(cube, status)
            }
            PointerEvent::MouseMove(pos) => {
                if !self.is_dragging {
                    self.pointer = pos;
                    self.update_hover(cube, status);
                }
                None
            }
            PointerEvent::TouchStart { touches, pos } => {
                if touches == 1 {
                    self.is_dragging = true;
                    self.pointer = pos;
                }
                None
            }
            PointerEvent::TouchMove { touches, pos } => {
                if touches == 1 && self.is_dragging {
                    self.pointer = pos;
                }
                None
            }
            PointerEvent::TouchEnd { touches } => {
                if touches != 0 || !self.is_dragging {
                    return None;
                }
                self.is_dragging = false;
                self.select_face(cube, status)
            }
        }
    }

    fn select_face(&self, cube: &Cube, status: &impl AnimationStatus) -> Option<Face> {
        face_at(
            cube,
            status,
            &self.camera,
            self.model,
            self.pointer,
            self.prefs.face_normal_threshold,
        )
    }

    fn update_hover(&mut self, cube: &Cube, status: &impl AnimationStatus) {
        if status.is_animating() {
            return;
        }
        self.hovered = if self.prefs.hover_highlight {
            pick(cube, &self.camera, self.model, self.pointer).map(|hit| hit.piece)
        } else {
            None
        };
    }
}
