pub mod age;
pub mod anomalies;
pub mod category;
pub mod classes;
pub mod couple;
pub mod eligible;
pub mod pair;
pub mod presets;
