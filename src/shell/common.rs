use wincore::geometry::Dim;

#[macro_export]
macro_rules! SHELL_NAME (
    () => { "sash" };
);

pub const DEFAULT_MIN_DIM: Dim = Dim {
    w: 100,
    h: 100,
};

pub const DEFAULT_MAX_DIM: Dim = Dim {
    w: 4096,
    h: 4096,
};
