//! 단위 간 수치 변환식을 태그드 enum으로 표현한다.
//!
//! 단위 하나는 기준 단위(base)에 대한 [`BaseScale`]을 가지고,
//! 단위 쌍은 두 스케일로부터 가장 단순한 [`Transform`]을 미리 유도해 둔다.

/// 단위 값을 카테고리 기준 단위로 환산하는 방법.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BaseScale {
    /// `base = value * factor`
    Linear(f64),
    /// `base = value * factor + offset`
    Affine { factor: f64, offset: f64 },
    /// 비선형 변환. 두 함수는 서로 역함수여야 한다.
    Custom {
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    },
}

impl BaseScale {
    /// 단위 값을 기준 단위 값으로 변환한다.
    pub fn to_base(&self, value: f64) -> f64 {
        match *self {
            BaseScale::Linear(factor) => value * factor,
            BaseScale::Affine { factor, offset } => value * factor + offset,
            BaseScale::Custom { to_base, .. } => to_base(value),
        }
    }

    /// 기준 단위 값을 이 단위 값으로 변환한다.
    pub fn from_base(&self, value: f64) -> f64 {
        match *self {
            BaseScale::Linear(factor) => value / factor,
            BaseScale::Affine { factor, offset } => (value - offset) / factor,
            BaseScale::Custom { from_base, .. } => from_base(value),
        }
    }

    /// 선형/아핀 스케일이면 `(factor, offset)`을 돌려준다.
    fn affine_parts(&self) -> Option<(f64, f64)> {
        match *self {
            BaseScale::Linear(factor) => Some((factor, 0.0)),
            BaseScale::Affine { factor, offset } => Some((factor, offset)),
            BaseScale::Custom { .. } => None,
        }
    }

    /// 배율이 0이 아니고 유한한지 확인한다. 사용자 정의 함수는 검사하지 않는다.
    pub fn is_invertible(&self) -> bool {
        match self.affine_parts() {
            Some((factor, offset)) => factor.is_finite() && factor != 0.0 && offset.is_finite(),
            None => true,
        }
    }
}

/// 단위 쌍 하나의 정방향 변환식. 역방향은 [`Transform::invert`]로 계산한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// 같은 단위끼리의 변환. 부동소수 오차를 만들지 않도록 값을 그대로 돌려준다.
    Identity,
    /// `forward(v) = v * factor`
    Ratio(f64),
    /// `forward(v) = v * multiplier + offset`
    Linear { multiplier: f64, offset: f64 },
    /// 기준 단위를 거치는 2단계 변환.
    ViaBase { from: BaseScale, to: BaseScale },
}

impl Transform {
    /// 두 단위의 기준 스케일로부터 변환식을 만든다.
    pub fn between(from: BaseScale, to: BaseScale) -> Self {
        if from == to {
            return Transform::Identity;
        }
        match (from, to) {
            (BaseScale::Linear(a), BaseScale::Linear(b)) => Transform::Ratio(a / b),
            _ => match (from.affine_parts(), to.affine_parts()) {
                // v*a1+o1 = u*a2+o2  =>  u = v*(a1/a2) + (o1-o2)/a2
                (Some((a1, o1)), Some((a2, o2))) => Transform::Linear {
                    multiplier: a1 / a2,
                    offset: (o1 - o2) / a2,
                },
                _ => Transform::ViaBase { from, to },
            },
        }
    }

    /// 정방향 변환.
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            Transform::Identity => value,
            Transform::Ratio(factor) => value * factor,
            Transform::Linear { multiplier, offset } => value * multiplier + offset,
            Transform::ViaBase { from, to } => to.from_base(from.to_base(value)),
        }
    }

    /// 역방향 변환. `invert(apply(v)) ≈ v`.
    pub fn invert(&self, value: f64) -> f64 {
        match *self {
            Transform::Identity => value,
            Transform::Ratio(factor) => value / factor,
            Transform::Linear { multiplier, offset } => (value - offset) / multiplier,
            Transform::ViaBase { from, to } => from.from_base(to.to_base(value)),
        }
    }
}

/// 변환식과 적용 방향을 묶은 값. 방향 전환은 이 플래그만 뒤집는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapping {
    pub transform: Transform,
    pub inverted: bool,
}

impl Mapping {
    pub fn forward(transform: Transform) -> Self {
        Self {
            transform,
            inverted: false,
        }
    }

    pub fn reverse(transform: Transform) -> Self {
        Self {
            transform,
            inverted: true,
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        if self.inverted {
            self.transform.invert(value)
        } else {
            self.transform.apply(value)
        }
    }
}
