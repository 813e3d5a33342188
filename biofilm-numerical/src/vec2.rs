use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;

/// 2D vector used to manipulate particle positions and orientations.
///
/// [`Vec2`] holds planar coordinates of a particle's centre or the versor along its long axis.
/// The struct implements the usual vector arithmetics, both as binary operators (`+`, `-`, `*`)
/// and their assigning variants (`+=`, `-=`, `*=`, `/=`).
///
/// ```
/// # use biofilm_numerical::Vec2;
/// let mut centre = Vec2::from_float(0.0);
/// for v in [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0)] {
///     centre += &v;
/// }
/// centre /= 4.0;
/// assert!(centre.distance_to(&Vec2::new(0.5, 0.5)) < 0.000001);
/// ```
#[derive(Clone, Copy, Default)]
pub struct Vec2 {
    /// the ``x`` coordinate of this vector
    pub x: f64,
    /// the ``y`` coordinate of this vector
    pub y: f64,
}

macro_rules! vec_operation {
    ($lhs:expr, $rhs:expr, $OP:tt ) => {
        $lhs.x $OP $rhs.x;
        $lhs.y $OP $rhs.y;
    };
}

macro_rules! scalar_operation {
    ($lhs:expr, $rhs:expr, $OP:tt ) => {
        $lhs.x $OP $rhs;
        $lhs.y $OP $rhs;
    };
}

impl AddAssign<&Vec2> for Vec2 {
    fn add_assign(&mut self, other: &Vec2) {
        vec_operation!(self, other, +=);
    }
}

impl SubAssign<&Vec2> for Vec2 {
    fn sub_assign(&mut self, other: &Vec2) {
        vec_operation!(self, other, -=);
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        scalar_operation!(self, rhs, *=);
    }
}

impl DivAssign<f64> for Vec2 {
    fn div_assign(&mut self, rhs: f64) {
        scalar_operation!(self, rhs, /=);
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2 { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2 { x: -self.x, y: -self.y }
    }
}

impl PartialEq for Vec2 {
    /// Two vectors are equal if the values of both coordinates are equal
    fn eq(&self, other: &Self) -> bool {
        return self.x == other.x && self.y == other.y;
    }
}

impl fmt::Debug for Vec2 {
    /// Debug formatting of a Vec2 prints both its fields, e.g.
    /// ```
    /// use biofilm_numerical::Vec2;
    /// let v = Vec2::new(0.0, 1.0);
    /// assert_eq!(format!("{:?}", v), "[0.000 1.000]");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3} {:.3}]", self.x, self.y)
    }
}

impl Display for Vec2 {
    /// Prints X Y coordinates of a given 2D vector
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.3} {:.3}", self.x, self.y)
    }
}

impl Vec2 {
    /// Creates a new vector from given coordinates.
    pub fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// Creates a new vector with both coordinates equal to a given value.
    ///
    /// ```
    /// # use biofilm_numerical::Vec2;
    /// let zero_vec = Vec2::from_float(0.0);
    /// assert_eq!(zero_vec.length(), 0.0);
    /// ```
    pub fn from_float(value: f64) -> Vec2 {
        Vec2 { x: value, y: value }
    }

    /// Creates a unit vector pointing at a given angle, measured counter-clockwise from the X axis.
    ///
    /// ```
    /// # use biofilm_numerical::Vec2;
    /// let v = Vec2::from_angle(std::f64::consts::FRAC_PI_2);
    /// assert!((v.y - 1.0).abs() < 0.000001);
    /// ```
    pub fn from_angle(theta: f64) -> Vec2 {
        Vec2 { x: theta.cos(), y: theta.sin() }
    }

    /// Assigns new coordinates to this vector.
    pub fn set2(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Returns the length of this vector
    pub fn length(&self) -> f64 {
        return self.length_squared().sqrt();
    }

    /// Returns the squared length of this vector
    pub fn length_squared(&self) -> f64 {
        return self.x * self.x + self.y * self.y;
    }

    /// Returns a normalized copy of this vector
    ///
    /// ```
    /// # use biofilm_numerical::Vec2;
    /// let v = Vec2::new(3.0, 4.0).normalized();
    /// assert!((v.length() - 1.0).abs() < 0.000001);
    /// ```
    pub fn normalized(&self) -> Vec2 {
        let mut v = self.clone();
        v /= self.length();
        return v;
    }

    /// Normalizes this vector
    pub fn normalize(&mut self) {
        *self /= self.length();
    }

    /// Calculates a dot product of two vectors
    pub fn dot(a: &Vec2, b: &Vec2) -> f64 {
        return a.x * b.x + a.y * b.y;
    }

    /// Calculates the scalar cross product of two vectors.
    ///
    /// In 2D the cross product reduces to a scalar: positive when `b` lies counter-clockwise
    /// from `a`, negative otherwise.
    ///
    /// ```
    /// # use biofilm_numerical::Vec2;
    /// let x = Vec2::new(1.0, 0.0);
    /// let y = Vec2::new(0.0, 1.0);
    /// assert!((Vec2::cross(&x, &y) - 1.0).abs() < 0.000001);
    /// ```
    pub fn cross(a: &Vec2, b: &Vec2) -> f64 {
        return a.x * b.y - a.y * b.x;
    }

    /// Calculates the squared distance to another point
    pub fn distance_square_to(&self, p: &Vec2) -> f64 {
        let mut d = self.x - p.x;
        let mut d2 = d * d;
        d = self.y - p.y;
        d2 += d * d;
        return d2;
    }

    /// Calculates the distance to another point
    pub fn distance_to(&self, p: &Vec2) -> f64 {
        self.distance_square_to(p).sqrt()
    }

    /// Returns a copy of this vector rotated by a given angle, counter-clockwise.
    ///
    /// The rotation uses the standard 2x2 matrix:
    /// ```
    /// # use biofilm_numerical::Vec2;
    /// let v = Vec2::new(1.0, 0.0).rotated(std::f64::consts::PI);
    /// assert!((v.x + 1.0).abs() < 0.000001);
    /// assert!(v.y.abs() < 0.000001);
    /// ```
    pub fn rotated(&self, theta: f64) -> Vec2 {
        let (sin_t, cos_t) = theta.sin_cos();
        Vec2 {
            x: self.x * cos_t - self.y * sin_t,
            y: self.x * sin_t + self.y * cos_t,
        }
    }
}

/// Draws a random unit vector, uniformly distributed on a circle.
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use biofilm_numerical::random_unit_versor;
/// let mut rng = SmallRng::seed_from_u64(42);
/// let v = random_unit_versor(&mut rng);
/// assert!((v.length() - 1.0).abs() < 0.000001);
/// ```
pub fn random_unit_versor<R: Rng>(rng: &mut R) -> Vec2 {
    let theta: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    return Vec2::from_angle(theta);
}
