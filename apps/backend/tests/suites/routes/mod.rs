mod frame_move;
mod trace_headers;
