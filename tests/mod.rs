mod support;

mod api_routes;
