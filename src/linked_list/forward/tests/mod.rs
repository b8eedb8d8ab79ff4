mod circular;
mod shared;
