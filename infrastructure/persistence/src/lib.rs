pub mod receipt {
    pub mod entity;
    pub mod repository;
}
