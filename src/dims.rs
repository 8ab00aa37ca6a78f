use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    /// Iterates all positions in the half-open rectangle `from..to`, row by row.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }

    pub fn all_positive(self) -> bool {
        self.0 > 0 && self.1 > 0
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    pub fn product(self) -> i32 {
        self.0 * self.1
    }

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// Manhattan distance between two positions.
    pub fn manhattan_dist(self, other: Dims) -> i32 {
        (self - other).abs_sum()
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl AddAssign for Dims {
    fn add_assign(&mut self, other: Dims) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl SubAssign for Dims {
    fn sub_assign(&mut self, other: Dims) {
        self.0 -= other.0;
        self.1 -= other.1;
    }
}

impl Mul<i32> for Dims {
    type Output = Dims;

    fn mul(self, other: i32) -> Dims {
        Dims(self.0 * other, self.1 * other)
    }
}

impl MulAssign<i32> for Dims {
    fn mul_assign(&mut self, other: i32) {
        self.0 *= other;
        self.1 *= other;
    }
}

impl Div<i32> for Dims {
    type Output = Dims;

    fn div(self, other: i32) -> Dims {
        Dims(self.0 / other, self.1 / other)
    }
}

impl DivAssign<i32> for Dims {
    fn div_assign(&mut self, other: i32) {
        self.0 /= other;
        self.1 /= other;
    }
}

impl From<(i32, i32)> for Dims {
    fn from(tuple: (i32, i32)) -> Self {
        Dims(tuple.0, tuple.1)
    }
}

impl From<Dims> for (i32, i32) {
    fn from(val: Dims) -> Self {
        (val.0, val.1)
    }
}

#[cfg(test)]
mod tests {
    use super::Dims;

    #[test]
    fn manhattan() {
        assert_eq!(Dims(1, 1).manhattan_dist(Dims(4, 5)), 7);
        assert_eq!(Dims(4, 5).manhattan_dist(Dims(1, 1)), 7);
        assert_eq!(Dims(2, 3).manhattan_dist(Dims(2, 3)), 0);
    }

    #[test]
    fn iter_fill_is_row_major() {
        let cells: Vec<_> = Dims::iter_fill(Dims::ZERO, Dims(2, 2)).collect();
        assert_eq!(cells, [Dims(0, 0), Dims(1, 0), Dims(0, 1), Dims(1, 1)]);
    }
}
