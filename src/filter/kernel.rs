use crate::Float;

pub trait Kernel {
    // Filter samples, centre element at index radius()
    fn kernel(&self) -> &Vec<Float>;
    // Half of the width of the kernel save the center element
    fn radius(&self) -> usize {
        self.kernel().len().saturating_sub(1)/2
    }

    fn normalizing_constant(&self) -> Float;
}
