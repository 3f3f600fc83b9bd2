use derive_more::{Display, From, Into};

/// A length in PDF points (1/72 of an inch). All page geometry in the crate
/// is expressed in points; the other unit types exist only to be converted.
#[derive(Display, From, Into, Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Pt(pub f32);

/// A length in millimetres
#[derive(Display, From, Into, Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Mm(pub f32);

/// A length in centimetres
#[derive(Display, From, Into, Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Cm(pub f32);

/// A length in inches
#[derive(Display, From, Into, Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct In(pub f32);

const PT_PER_IN: f32 = 72.0;
const MM_PER_IN: f32 = 25.4;

impl From<Mm> for Pt {
    fn from(v: Mm) -> Pt {
        Pt(v.0 * PT_PER_IN / MM_PER_IN)
    }
}

impl From<Cm> for Pt {
    fn from(v: Cm) -> Pt {
        Pt(v.0 * 10.0 * PT_PER_IN / MM_PER_IN)
    }
}

impl From<In> for Pt {
    fn from(v: In) -> Pt {
        Pt(v.0 * PT_PER_IN)
    }
}

impl From<Pt> for Mm {
    fn from(v: Pt) -> Mm {
        Mm(v.0 * MM_PER_IN / PT_PER_IN)
    }
}

impl From<Pt> for In {
    fn from(v: Pt) -> In {
        In(v.0 / PT_PER_IN)
    }
}

impl std::ops::Add for Pt {
    type Output = Pt;
    fn add(self, rhs: Pt) -> Pt {
        Pt(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Pt {
    fn add_assign(&mut self, rhs: Pt) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for Pt {
    type Output = Pt;
    fn sub(self, rhs: Pt) -> Pt {
        Pt(self.0 - rhs.0)
    }
}

impl std::ops::SubAssign for Pt {
    fn sub_assign(&mut self, rhs: Pt) {
        self.0 -= rhs.0;
    }
}

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;
    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;
    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl std::ops::Neg for Pt {
    type Output = Pt;
    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}

impl std::iter::Sum for Pt {
    fn sum<I: Iterator<Item = Pt>>(iter: I) -> Pt {
        Pt(iter.map(|v| v.0).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_units() {
        let pt: Pt = In(1.0).into();
        assert_eq!(pt, Pt(72.0));
        let pt: Pt = Cm(1.0).into();
        assert!((pt.0 - 28.3465).abs() < 1e-3);
        let mm: Mm = Pt(72.0).into();
        assert!((mm.0 - 25.4).abs() < 1e-5);
    }

    #[test]
    fn arithmetic_behaves_like_f32() {
        assert_eq!(Pt(1.0) + Pt(2.0), Pt(3.0));
        assert_eq!(Pt(6.0) - Pt(2.0), Pt(4.0));
        assert_eq!(Pt(3.0) * 2.0, Pt(6.0));
        assert_eq!(Pt(6.0) / 2.0, Pt(3.0));
        assert_eq!(-Pt(1.5), Pt(-1.5));
        let total: Pt = [Pt(1.0), Pt(2.0), Pt(3.0)].into_iter().sum();
        assert_eq!(total, Pt(6.0));
    }
}
