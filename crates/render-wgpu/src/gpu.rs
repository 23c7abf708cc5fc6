use crate::context::{DEPTH_FORMAT, GpuContext};
use crate::shaders;
use bouncebox_render::{Renderer, RendererSettings};
use bouncebox_scene::{BoxGeometry, PerspectiveCamera, Scene};
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

/// Directional lights the shader evaluates; extra lights are ignored.
pub const MAX_LIGHTS: usize = 4;

const MAX_INSTANCES: u32 = 256;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct LightUniform {
    direction: [f32; 4],
    radiance: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    light_count: [u32; 4],
    lights: [LightUniform; MAX_LIGHTS],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct InstanceData {
    model_0: [f32; 4],
    model_1: [f32; 4],
    model_2: [f32; 4],
    model_3: [f32; 4],
    color: [f32; 4],
}

fn uniforms(scene: &Scene, camera: &PerspectiveCamera) -> Uniforms {
    let mut lights = [LightUniform::zeroed(); MAX_LIGHTS];
    let active = scene.lights().len().min(MAX_LIGHTS);
    if scene.lights().len() > MAX_LIGHTS {
        tracing::warn!(
            lights = scene.lights().len(),
            max = MAX_LIGHTS,
            "too many directional lights; extras ignored"
        );
    }
    for (slot, light) in lights.iter_mut().zip(scene.lights()) {
        let d = light.direction();
        let [r, g, b] = light.radiance();
        *slot = LightUniform {
            direction: [d.x, d.y, d.z, 0.0],
            radiance: [r, g, b, 1.0],
        };
    }
    Uniforms {
        view_proj: camera.view_projection().to_cols_array_2d(),
        light_count: [active as u32, 0, 0, 0],
        lights,
    }
}

fn instances(scene: &Scene, max: usize) -> Vec<InstanceData> {
    scene
        .meshes()
        .take(max)
        .map(|(_, mesh)| {
            let cols = mesh.model_matrix().to_cols_array_2d();
            let [r, g, b] = mesh.material.color.linear();
            InstanceData {
                model_0: cols[0],
                model_1: cols[1],
                model_2: cols[2],
                model_3: cols[3],
                color: [r, g, b, 1.0],
            }
        })
        .collect()
}

/// wgpu renderer for the scene's boxes.
pub struct WgpuRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
    clear_color: wgpu::Color,
}

impl WgpuRenderer {
    pub fn new(gpu: &GpuContext, settings: &RendererSettings) -> Self {
        let device = gpu.device();

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniform_buffer"),
            contents: bytemuck::bytes_of(&Uniforms {
                view_proj: Mat4::IDENTITY.to_cols_array_2d(),
                ..Uniforms::zeroed()
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::MESH_SHADER.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<Vertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x3,
                            1 => Float32x3,
                        ],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<InstanceData>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            2 => Float32x4,
                            3 => Float32x4,
                            4 => Float32x4,
                            5 => Float32x4,
                            6 => Float32x4,
                        ],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.format(),
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let mesh = BoxGeometry::mesh_data();
        let vertices: Vec<Vertex> = mesh
            .vertices
            .iter()
            .map(|v| Vertex {
                position: v.position,
                normal: v.normal,
            })
            .collect();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("box_vertex_buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("box_index_buffer"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        // Instance buffer (pre-allocated)
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_buffer"),
            size: MAX_INSTANCES as u64 * std::mem::size_of::<InstanceData>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let [r, g, b] = settings.clear_color.linear();

        Self {
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            instance_buffer,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
        }
    }

    /// Bind this renderer to a target view for one frame.
    pub fn frame<'a>(&'a self, gpu: &'a GpuContext, view: &'a wgpu::TextureView) -> FramePass<'a> {
        FramePass {
            renderer: self,
            gpu,
            view,
        }
    }
}

/// One frame's render target, usable wherever a [`Renderer`] is expected.
pub struct FramePass<'a> {
    renderer: &'a WgpuRenderer,
    gpu: &'a GpuContext,
    view: &'a wgpu::TextureView,
}

impl Renderer for FramePass<'_> {
    type Output = ();

    /// Clear, then draw every mesh in the scene.
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) {
        let r = self.renderer;
        let queue = self.gpu.queue();

        queue.write_buffer(
            &r.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms(scene, camera)),
        );

        let instances = instances(scene, MAX_INSTANCES as usize);
        if !instances.is_empty() {
            queue.write_buffer(&r.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: self.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(r.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.gpu.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            if !instances.is_empty() {
                pass.set_pipeline(&r.pipeline);
                pass.set_bind_group(0, &r.uniform_bind_group, &[]);
                pass.set_vertex_buffer(0, r.vertex_buffer.slice(..));
                pass.set_vertex_buffer(1, r.instance_buffer.slice(..));
                pass.set_index_buffer(r.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..r.index_count, 0, 0..instances.len() as u32);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }
}
