mod animatable;
mod timing;

pub use animatable::Animatable;
pub use timing::TimingFunction;
