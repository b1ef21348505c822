//! Plain values the drawing layer consumes: cameras that produce transform matrices, and
//! the quads it batches. Uploading and drawing belong to the GPU backend, not here.

mod camera;
mod quad;
pub use camera::*;
pub use quad::*;
