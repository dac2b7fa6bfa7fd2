pub mod update_my_participation;
