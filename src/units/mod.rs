//! 단위 정의 및 변환 모듈 모음. 내부 기준은 모두 SI 단위이다.

pub mod area;
pub mod density;
pub mod length;
pub mod mass;
pub mod permeability;
pub mod pressure;
pub mod viscosity;
pub mod volume;

pub use area::{convert_area, AreaUnit};
pub use density::{convert_density, DensityUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use permeability::{convert_permeability, PermeabilityUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
pub use volume::{convert_volume, VolumeUnit};
