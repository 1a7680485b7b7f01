use yew::prelude::*;

use crate::content::{self, SectionConfig, VideoToolConfig};

/// Text placed before the `index`-th of `count` channel links:
/// "A", "A & B", "A, B & C".
fn separator(index: usize, count: usize) -> &'static str {
    if index == 0 {
        ""
    } else if index + 1 == count {
        " & "
    } else {
        ", "
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoToolProps {
    #[prop_or(&content::VIDEO_TOOL)]
    pub config: &'static VideoToolConfig,
}

/// Announcement of the in-house video tool. Static, no entrance motion.
#[function_component(VideoTool)]
pub fn video_tool(props: &VideoToolProps) -> Html {
    let config = props.config;
    if !config.is_enabled() {
        return html! {};
    }
    let count = config.channels.len();

    html! {
        <section id="video-tool" class="video-tool">
            <style>
                {r#"
                .video-tool {
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 4rem 2rem;
                    background: #000;
                    color: #fff;
                }
                .video-tool h2 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .video-tool__intro {
                    max-width: 36rem;
                    text-align: center;
                    margin-bottom: 1.5rem;
                    font-size: 1.125rem;
                }
                .video-tool__intro a {
                    color: #60a5fa;
                    text-decoration: underline;
                }
                .video-tool__shots {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                }
                .video-tool__shots img {
                    width: 16rem;
                    height: auto;
                    border-radius: 0.25rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.5);
                }
                "#}
            </style>
            <h2>{config.title}</h2>
            <p class="video-tool__intro">
                {config.intro}
                {
                    if count > 0 {
                        html! {
                            <>
                                <br />
                                { for config.channels.iter().enumerate().map(|(i, channel)| html! {
                                    <>
                                        {separator(i, count)}
                                        <a href={channel.href} target="_blank" rel="noopener noreferrer">{channel.label}</a>
                                    </>
                                }) }
                                {"."}
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </p>
            <div class="video-tool__shots">
                { for config.screenshots.iter().map(|shot| html! {
                    <img key={shot.src} src={shot.src} alt={shot.alt} loading="lazy" />
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::testing::{assert_in_order, escaped, render, without_markers};

    #[test]
    fn channels_read_as_a_list() {
        let joined = |n: usize| -> String {
            (0..n).map(|i| format!("{}{}", separator(i, n), i)).collect()
        };
        assert_eq!(joined(1), "0");
        assert_eq!(joined(2), "0 & 1");
        assert_eq!(joined(3), "0, 1 & 2");
    }

    #[test]
    fn announcement_is_enabled_by_default() {
        assert!(content::VIDEO_TOOL.is_enabled());
        assert!(!VideoToolConfig { title: "", ..content::VIDEO_TOOL }.is_enabled());
    }

    #[test]
    fn rendered_announcement_reproduces_its_copy() {
        let config = &content::VIDEO_TOOL;
        let html = render::<VideoTool>(VideoToolProps { config });
        let mut texts = vec![config.title, config.intro];
        texts.extend(config.channels.iter().map(|c| c.label));
        assert_in_order(&html, &texts);
        for shot in config.screenshots {
            assert!(html.contains(&escaped(shot.alt)), "{}", shot.alt);
        }
    }

    #[test]
    fn disabled_announcement_renders_nothing() {
        static OFF: VideoToolConfig = VideoToolConfig { title: "", ..content::VIDEO_TOOL };
        let html = render::<VideoTool>(VideoToolProps { config: &OFF });
        assert_eq!(without_markers(&html).trim(), "");
    }
}
