use digest::DynDigest;

/// Marks a type that implements `DynDigest + Default + Clone`.
pub trait FullDigest: DynDigest + Default + Clone {}
impl<T: DynDigest + Default + Clone> FullDigest for T {}
