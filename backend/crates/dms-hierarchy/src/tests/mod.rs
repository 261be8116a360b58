mod directory_mirror;
mod error;
