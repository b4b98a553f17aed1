mod frame;
mod rotation;

pub use frame::{
    build_view_transform, init_frame, move_frame_forward, rotate_frame_local_y, Frame,
};
pub use rotation::{cross_product, load_identity_matrix, rotate_vector, rotation_matrix};
