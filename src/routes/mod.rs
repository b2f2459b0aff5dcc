pub mod register_route;
