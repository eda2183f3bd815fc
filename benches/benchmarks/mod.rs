pub mod polygons;
