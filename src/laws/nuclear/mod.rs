pub mod buckling;
