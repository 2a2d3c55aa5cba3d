//! Scanline rasterization: edge lists, frame buffers and z-buffer compositing.

pub mod edgelist;
pub mod framebuffer;
pub mod zbuffer;

pub use edgelist::{compute_edge_list, compute_edge_list_clipped, EdgeList};
pub use framebuffer::FrameBuffer;
pub use zbuffer::compute_zbuffer;
