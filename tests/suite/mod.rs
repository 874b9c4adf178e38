mod register;
mod session;
