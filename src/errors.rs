error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }

    foreign_links {
        Fmt(::std::fmt::Error);
        Io(::std::io::Error);
        Serde(::serde_json::Error);
        TokioTimer(::tokio_timer::TimerError);
    }

    errors {
        InvalidSettings(reason: String) {
            description("invalid settings")
            display("invalid settings: {}", reason)
        }
        UnknownActor(name: String) {
            description("unknown actor")
            display("no actor named '{}' in this session", name)
        }
        CommandStreamFailed {
            description("command stream failed")
            display("the input command stream failed")
        }
    }
}
