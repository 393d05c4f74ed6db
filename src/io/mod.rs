pub mod desk_io;
pub mod source;
