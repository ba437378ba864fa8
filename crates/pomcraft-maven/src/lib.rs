//! Maven publication conventions: POM metadata and its XML form, the
//! publication descriptor, and repository file layout.

pub mod conventions;
pub mod pom;
pub mod publish;
pub mod repository;
