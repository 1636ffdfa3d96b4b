pub trait Sailed {}

impl Sailed for bool {}
impl Sailed for i8 {}
impl Sailed for i16 {}
impl Sailed for i32 {}
impl Sailed for i64 {}
impl Sailed for f32 {}
impl Sailed for f64 {}
impl Sailed for char {}
