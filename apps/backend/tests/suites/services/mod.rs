mod game_outcomes;
mod move_input_props;
