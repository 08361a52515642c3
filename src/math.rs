#[cfg(feature = "std")]
pub fn round(value: f64) -> f64 {
    value.round()
}

#[cfg(feature = "std")]
pub fn floor(value: f64) -> f64 {
    value.floor()
}

#[cfg(feature = "std")]
pub fn trunc(value: f64) -> f64 {
    value.trunc()
}

#[cfg(feature = "std")]
pub fn exp(value: f64) -> f64 {
    value.exp()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub fn round(value: f64) -> f64 {
    libm::round(value)
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub fn floor(value: f64) -> f64 {
    libm::floor(value)
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub fn trunc(value: f64) -> f64 {
    libm::trunc(value)
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub fn exp(value: f64) -> f64 {
    libm::exp(value)
}
